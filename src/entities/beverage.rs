use crate::CafeError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;

/// Identifier stamped on a beverage when it is brewed.
///
/// Always within `BeverageId::MIN..=BeverageId::MAX`. Uniqueness is not
/// guaranteed: two beverages may carry the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeverageId(u16);

impl BeverageId {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 1000;

    pub fn new(value: u16) -> Result<Self, CafeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CafeError::IdentifierOutOfRange(u32::from(value)))
        }
    }

    /// Builds an identifier from a value already drawn from the valid range.
    pub(crate) fn in_range(value: u16) -> Self {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&value),
            "identifier {} drawn outside the valid range",
            value
        );
        Self(value)
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for BeverageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeverageKind {
    Espresso,
    Latte,
}

impl BeverageKind {
    /// Name used when the beverage is served.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Espresso => "Espresso",
            Self::Latte => "Latte",
        }
    }
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A drink produced by a beverage factory.
///
/// Beverages are immutable once brewed. They are plain owned values: the
/// orchestrator records and serves one, then lets it fall out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beverage {
    id: BeverageId,
    kind: BeverageKind,
    brewed_at: DateTime<Utc>,
}

impl Beverage {
    pub fn new(id: BeverageId, kind: BeverageKind) -> Self {
        Self {
            id,
            kind,
            brewed_at: Utc::now(),
        }
    }

    /// Returns the beverage identifier.
    pub fn id(&self) -> BeverageId {
        self.id
    }

    /// Returns which drink this is.
    pub fn kind(&self) -> BeverageKind {
        self.kind
    }

    /// Returns when the beverage was brewed.
    pub fn brewed_at(&self) -> DateTime<Utc> {
        self.brewed_at
    }

    /// Writes the serving notice for this beverage to `out`.
    ///
    /// # Returns
    /// * `Ok(())` - Notice written
    /// * `Err(CafeError)` - The output sink rejected the write
    pub fn serve<W: Write>(&self, out: &mut W) -> Result<(), CafeError> {
        writeln!(out, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serving {} with id {}.", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beverage_id_range() {
        assert!(BeverageId::new(1).is_ok());
        assert!(BeverageId::new(1000).is_ok());
        assert!(matches!(
            BeverageId::new(0),
            Err(CafeError::IdentifierOutOfRange(0))
        ));
        assert!(matches!(
            BeverageId::new(1001),
            Err(CafeError::IdentifierOutOfRange(1001))
        ));
    }

    #[test]
    fn test_in_range_keeps_value() {
        assert_eq!(BeverageId::in_range(1).get(), 1);
        assert_eq!(BeverageId::in_range(1000).get(), 1000);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the valid range")]
    fn test_in_range_rejects_out_of_range_draw() {
        BeverageId::in_range(1001);
    }

    #[test]
    fn test_serve_writes_notice() {
        let beverage = Beverage::new(BeverageId::new(17).unwrap(), BeverageKind::Espresso);
        let mut out = Vec::new();

        beverage.serve(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Serving Espresso with id 17.\n");
    }

    #[test]
    fn test_serve_does_not_change_beverage() {
        let beverage = Beverage::new(BeverageId::new(999).unwrap(), BeverageKind::Latte);
        let before = beverage.clone();
        let mut out = Vec::new();

        beverage.serve(&mut out).unwrap();
        beverage.serve(&mut out).unwrap();

        assert_eq!(beverage, before);
        assert_eq!(beverage.id().get(), 999);
        assert_eq!(beverage.kind(), BeverageKind::Latte);
    }
}
