// Recent-transition history: one forward pass over samples ordered
// (machine_id ASC, timestamp DESC), newest first within a machine.

use crate::models::{Dashboard, MachineHistory, Sample};

/// Max entries kept per history list.
pub const HISTORY_CAPACITY: usize = 10;

/// The three tracked fields of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedField {
    Production,
    Status,
    Alarms,
}

impl TrackedField {
    pub const ALL: [TrackedField; 3] = [
        TrackedField::Production,
        TrackedField::Status,
        TrackedField::Alarms,
    ];

    /// Whether a sample may enter this field's history at all.
    pub fn admits(self, sample: &Sample) -> bool {
        match self {
            TrackedField::Production => sample.production_total > 0,
            TrackedField::Status => true,
            TrackedField::Alarms => sample.has_alarms(),
        }
    }

    /// Whether two samples carry the same value for this field.
    pub fn same_value(self, a: &Sample, b: &Sample) -> bool {
        match self {
            TrackedField::Production => a.production_total == b.production_total,
            TrackedField::Status => a.status == b.status,
            TrackedField::Alarms => a.alarms() == b.alarms(),
        }
    }

    pub fn list(self, history: &MachineHistory) -> &[Sample] {
        match self {
            TrackedField::Production => &history.production,
            TrackedField::Status => &history.status,
            TrackedField::Alarms => &history.alarms,
        }
    }

    fn list_mut(self, history: &mut MachineHistory) -> &mut Vec<Sample> {
        match self {
            TrackedField::Production => &mut history.production,
            TrackedField::Status => &mut history.status,
            TrackedField::Alarms => &mut history.alarms,
        }
    }
}

/// Appends `sample` to the field's list if there is room, the field admits it,
/// and its value differs from the last kept entry.
fn track(history: &mut MachineHistory, field: TrackedField, sample: &Sample) {
    let list = field.list_mut(history);
    if list.len() >= HISTORY_CAPACITY || !field.admits(sample) {
        return;
    }
    let changed = list
        .last()
        .is_none_or(|last| !field.same_value(last, sample));
    if changed {
        list.push(sample.clone());
    }
}

/// Groups samples per machine and builds each machine's capped transition
/// histories. `latest` is the first sample seen for a machine. Input must
/// already be sorted; nothing is re-ordered here except the final flip of each
/// history to oldest-first.
pub fn aggregate<'a, I>(samples: I) -> Dashboard
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut dashboard = Dashboard::new();
    for sample in samples {
        let history = dashboard.entry_or_insert(sample);
        for field in TrackedField::ALL {
            track(history, field, sample);
        }
    }
    for history in dashboard.machines_mut() {
        history.production.reverse();
        history.status.reverse();
        history.alarms.reverse();
    }
    dashboard
}
