// Aggregated per-machine view served to the page and the JSON endpoint

use std::collections::HashMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::Sample;

/// Latest sample plus the three transition histories of one machine.
/// History lists are chronological (oldest first).
#[derive(Debug, Clone, PartialEq)]
pub struct MachineHistory {
    pub machine_id: String,
    pub latest: Sample,
    pub production: Vec<Sample>,
    pub status: Vec<Sample>,
    pub alarms: Vec<Sample>,
}

impl MachineHistory {
    pub fn new(latest: Sample) -> Self {
        Self {
            machine_id: latest.machine_id.clone(),
            latest,
            production: Vec::new(),
            status: Vec::new(),
            alarms: Vec::new(),
        }
    }
}

// machine_id is the key of the enclosing map, so it is not repeated here.
impl Serialize for MachineHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("MachineHistory", 4)?;
        s.serialize_field("last_data", &self.latest)?;
        s.serialize_field("producao", &self.production)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("alarmes", &self.alarms)?;
        s.end()
    }
}

/// Machines keyed by id, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    machines: Vec<MachineHistory>,
    index: HashMap<String, usize>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn machines(&self) -> impl Iterator<Item = &MachineHistory> {
        self.machines.iter()
    }

    pub fn get(&self, machine_id: &str) -> Option<&MachineHistory> {
        self.index.get(machine_id).map(|&i| &self.machines[i])
    }

    /// Appends a machine unless its id is already present. Returns the entry either way.
    pub(crate) fn entry_or_insert(&mut self, first: &Sample) -> &mut MachineHistory {
        let i = match self.index.get(&first.machine_id) {
            Some(&i) => i,
            None => {
                self.machines.push(MachineHistory::new(first.clone()));
                let i = self.machines.len() - 1;
                self.index.insert(first.machine_id.clone(), i);
                i
            }
        };
        &mut self.machines[i]
    }

    pub(crate) fn machines_mut(&mut self) -> impl Iterator<Item = &mut MachineHistory> {
        self.machines.iter_mut()
    }
}

impl Serialize for Dashboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.machines.len()))?;
        for m in &self.machines {
            map.serialize_entry(&m.machine_id, m)?;
        }
        map.end()
    }
}

/// What the store had to offer for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Ready(Dashboard),
    /// The telemetry table does not exist yet (collector has not started).
    Initializing,
}

impl DashboardState {
    /// True when the page should show the waiting placeholder.
    pub fn is_waiting(&self) -> bool {
        match self {
            DashboardState::Ready(d) => d.is_empty(),
            DashboardState::Initializing => true,
        }
    }
}
