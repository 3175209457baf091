//! Property domain entity

/// A managed building or estate. Properties are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Id of the caretaker user looking after the property, if assigned
    pub caretaker_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub caretaker_id: Option<String>,
}

impl NewProperty {
    pub fn into_property(self, id: String) -> Property {
        Property {
            id,
            name: self.name,
            address: self.address,
            caretaker_id: self.caretaker_id,
        }
    }
}
