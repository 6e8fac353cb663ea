pub mod agency;
pub mod agent;
pub mod property;

use crate::models::{Agency, Agent, Property, User};

/// In-memory catalog of every entity the marketplace knows about. Nothing
/// here persists; mutations are local view-state and gone on restart.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub agents: Vec<Agent>,
    pub agencies: Vec<Agency>,
    pub users: Vec<User>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time pass wiring the derived relation lists from the foreign
    /// keys. Mutations do not keep these up to date; run it again after
    /// bulk edits.
    pub fn link(&mut self) {
        for agent in &mut self.agents {
            agent.property_ids = self
                .properties
                .iter()
                .filter(|p| p.agent_id.as_deref() == Some(agent.id.as_str()))
                .map(|p| p.id.clone())
                .collect();
        }

        for agency in &mut self.agencies {
            agency.agent_ids = self
                .agents
                .iter()
                .filter(|a| a.agency_id.as_deref() == Some(agency.id.as_str()))
                .map(|a| a.id.clone())
                .collect();
            agency.property_ids = self
                .properties
                .iter()
                .filter(|p| p.agency_id.as_deref() == Some(agency.id.as_str()))
                .map(|p| p.id.clone())
                .collect();
        }
    }
}
