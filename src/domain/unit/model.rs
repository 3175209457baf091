//! Unit domain entity

use rust_decimal::Decimal;

/// Occupancy of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitStatus {
    Occupied,
    #[default]
    Vacant,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Occupied => "occupied",
            Self::Vacant => "vacant",
        }
    }
}

/// A rentable unit inside exactly one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: String,
    pub property_id: String,
    pub unit_number: String,
    pub unit_type: String,
    /// Monthly rent
    pub rent_amount: Decimal,
    pub status: UnitStatus,
}

impl Unit {
    pub fn is_occupied(&self) -> bool {
        self.status == UnitStatus::Occupied
    }

    pub fn mark_occupied(&mut self) {
        self.status = UnitStatus::Occupied;
    }
}

#[derive(Debug, Clone)]
pub struct NewUnit {
    pub property_id: String,
    pub unit_number: String,
    pub unit_type: String,
    pub rent_amount: Decimal,
    pub status: Option<UnitStatus>,
}

impl NewUnit {
    pub fn into_unit(self, id: String) -> Unit {
        Unit {
            id,
            property_id: self.property_id,
            unit_number: self.unit_number,
            unit_type: self.unit_type,
            rent_amount: self.rent_amount,
            status: self.status.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_unit_defaults_to_vacant() {
        let unit = NewUnit {
            property_id: "p1".into(),
            unit_number: "C4".into(),
            unit_type: "Studio".into(),
            rent_amount: Decimal::new(850, 0),
            status: None,
        }
        .into_unit("x".into());

        assert_eq!(unit.status, UnitStatus::Vacant);
        assert!(!unit.is_occupied());
    }

    #[test]
    fn mark_occupied_flips_status() {
        let mut unit = NewUnit {
            property_id: "p1".into(),
            unit_number: "C5".into(),
            unit_type: "Studio".into(),
            rent_amount: Decimal::new(850, 0),
            status: Some(UnitStatus::Vacant),
        }
        .into_unit("y".into());

        unit.mark_occupied();
        assert!(unit.is_occupied());
    }
}
