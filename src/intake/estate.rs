use rust_decimal::Decimal;

/// Estate value summary reported on DE-111 item 3(d).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstateTotals {
    pub personal_property: Decimal,
    pub real_property_gross: Decimal,
    pub real_property_encumbrance: Decimal,
    /// Never negative.
    pub real_property_net: Decimal,
    pub total: Decimal,
}

/// Net real property is gross less encumbrances, clamped at zero; the total
/// adds personal property to that net figure.
///
/// Arithmetic saturates at the `Decimal` bounds instead of overflowing.
pub fn derive_estate_totals(
    personal: Decimal,
    gross_real: Decimal,
    encumbrance: Decimal,
) -> EstateTotals {
    let net = gross_real.saturating_sub(encumbrance).max(Decimal::ZERO);
    EstateTotals {
        personal_property: personal,
        real_property_gross: gross_real,
        real_property_encumbrance: encumbrance,
        real_property_net: net,
        total: personal.saturating_add(net),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underwater_real_property_clamps_to_zero() {
        let totals =
            derive_estate_totals(Decimal::from(1000), Decimal::from(500), Decimal::from(700));
        assert_eq!(totals.real_property_net, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from(1000));
    }

    #[test]
    fn test_positive_equity_adds_to_total() {
        let totals = derive_estate_totals(
            Decimal::new(2_500_050, 2),
            Decimal::from(800_000),
            Decimal::from(350_000),
        );
        assert_eq!(totals.real_property_net, Decimal::from(450_000));
        assert_eq!(totals.total, Decimal::new(47_500_050, 2));
    }

    #[test]
    fn test_amounts_at_the_decimal_limit_saturate() {
        let totals = derive_estate_totals(Decimal::MAX, Decimal::MAX, Decimal::ZERO);
        assert_eq!(totals.real_property_net, Decimal::MAX);
        assert_eq!(totals.total, Decimal::MAX);

        let totals = derive_estate_totals(Decimal::ZERO, Decimal::MAX, Decimal::MIN);
        assert_eq!(totals.real_property_net, Decimal::MAX);

        let totals = derive_estate_totals(Decimal::MIN, Decimal::MIN, Decimal::MAX);
        assert_eq!(totals.real_property_net, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::MIN);
    }
}
