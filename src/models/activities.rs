use serde::{Serialize, Serializer};

// One row of the activity table; the name lives on the table key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

// Activity name -> activity, kept in seed order.
// Serializes as a JSON object so `/activities` returns the same shape the
// browser client iterates with `Object.entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityTable {
    entries: Vec<(String, Activity)>,
}

impl ActivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds an activity. Names are unique; a second insert under the same name
    // is ignored and returns `false`.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.entries.push((name, activity));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for ActivityTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}
