//! The validated technology descriptor.

use std::fmt;

use gridmix_params::{CostCategory, EconomicParams, TechnicalParams};

use crate::{error::TechnoError, family::Family};

/// The subtype marking the charging segment of a storage technology.
///
/// Only this subtype is subject to the storage-charge cost check; the
/// discharge segment and every other subtype are unconstrained.
pub const CHARGE_SUBTYPE: &str = "charge";

/// A validated technology descriptor.
///
/// A descriptor ties a technology's identity (its family, a name such as
/// "nuclear" or "gas", and a subtype such as "new", "hist", or "charge")
/// to its three parameter objects. `E` and `T` are consumed through the
/// [`EconomicParams`] and [`TechnicalParams`] contracts; the specialization
/// payload `S` is stored and forwarded without interpretation.
///
/// Construction runs all consistency checks synchronously and returns
/// [`TechnoError`] instead of a value when one fails, so every live
/// descriptor satisfies the checks it was built under. Setters for fields
/// the checks read (`family`, `subtype`, economic parameters) re-run the
/// full validation and leave the descriptor unchanged on failure; setters
/// for the remaining fields are plain overwrites.
///
/// Parameter objects are queried, never mutated, by the descriptor. When a
/// parameter object is shared between descriptors (via `Rc`), mutating it
/// through other means after construction triggers no re-validation: the
/// checks run at construction and checked-setter time only.
#[derive(Debug, Clone)]
pub struct Techno<E, T, S> {
    family: Family,
    name: String,
    subtype: String,
    eco: E,
    tech: T,
    spec: S,
}

impl<E: EconomicParams, T: TechnicalParams, S> Techno<E, T, S> {
    /// Creates a descriptor, running all consistency checks.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the economic parameters declare both or
    /// neither financing mode, or if a storage charging segment carries a
    /// non-empty, all-positive variable cost profile.
    pub fn new(
        family: Family,
        name: impl Into<String>,
        subtype: impl Into<String>,
        eco: E,
        tech: T,
        spec: S,
    ) -> Result<Self, TechnoError> {
        let name = name.into();
        let subtype = subtype.into();
        validate(family, &name, &subtype, &eco)?;
        Ok(Self {
            family,
            name,
            subtype,
            eco,
            tech,
            spec,
        })
    }

    /// Returns the family of this technology.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Returns the technology name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subtype within the technology group.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the economic parameters.
    #[must_use]
    pub const fn economic_params(&self) -> &E {
        &self.eco
    }

    /// Returns the technical parameters.
    #[must_use]
    pub const fn technical_params(&self) -> &T {
        &self.tech
    }

    /// Returns the specialization payload.
    #[must_use]
    pub const fn spec_params(&self) -> &S {
        &self.spec
    }

    /// Replaces the technology name.
    ///
    /// The name is not read by any consistency check, so this is a plain
    /// overwrite.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the family, re-running all consistency checks.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the current configuration is inconsistent
    /// under the new family; the descriptor is left unchanged.
    pub fn set_family(&mut self, family: Family) -> Result<(), TechnoError> {
        validate(family, &self.name, &self.subtype, &self.eco)?;
        self.family = family;
        Ok(())
    }

    /// Replaces the subtype, re-running all consistency checks.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the current configuration is inconsistent
    /// under the new subtype (e.g. renaming a storage segment to
    /// [`CHARGE_SUBTYPE`] while its variable costs are all positive); the
    /// descriptor is left unchanged.
    pub fn set_subtype(&mut self, subtype: impl Into<String>) -> Result<(), TechnoError> {
        let subtype = subtype.into();
        validate(self.family, &self.name, &subtype, &self.eco)?;
        self.subtype = subtype;
        Ok(())
    }

    /// Replaces the economic parameters, re-running all consistency checks.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the new parameters are inconsistent; the
    /// descriptor keeps its previous parameters.
    pub fn set_economic_params(&mut self, eco: E) -> Result<(), TechnoError> {
        validate(self.family, &self.name, &self.subtype, &eco)?;
        self.eco = eco;
        Ok(())
    }

    /// Replaces the technical parameters. Plain overwrite; no check reads
    /// them.
    pub fn set_technical_params(&mut self, tech: T) {
        self.tech = tech;
    }

    /// Replaces the specialization payload. Plain overwrite; no check reads
    /// it.
    pub fn set_spec_params(&mut self, spec: S) {
        self.spec = spec;
    }

    /// Returns a human-readable multi-line summary of this technology.
    ///
    /// Purely diagnostic: the output is never used for control flow, and
    /// producing it cannot fail. Parameter objects that provide no summary
    /// are skipped silently.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::from("### technology summary\n");
        out.push_str(&format!("name    : {}\n", self.name));
        out.push_str(&format!("family  : {}\n", self.family));
        out.push_str(&format!("subtype : {}\n", self.subtype));
        if let Some(summary) = self.eco.summary() {
            out.push_str(&format!("eco     : {summary}\n"));
        }
        if let Some(summary) = self.tech.summary() {
            out.push_str(&format!("tech    : {summary}\n"));
        }
        out
    }
}

impl<E: EconomicParams, T: TechnicalParams, S> fmt::Display for Techno<E, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Runs all consistency checks against a candidate configuration.
fn validate<E: EconomicParams>(
    family: Family,
    name: &str,
    subtype: &str,
    eco: &E,
) -> Result<(), TechnoError> {
    check_financing(family, name, subtype, eco)?;
    check_storage_charge_costs(family, name, subtype, eco)?;
    Ok(())
}

/// Checks that exactly one financing mode is declared.
fn check_financing<E: EconomicParams>(
    family: Family,
    name: &str,
    subtype: &str,
    eco: &E,
) -> Result<(), TechnoError> {
    let is_capitalized = eco.is_capitalized();
    let is_depreciated = eco.is_depreciated();
    if is_capitalized && is_depreciated {
        return Err(TechnoError::both_financing_modes(family, name, subtype));
    }
    if !is_capitalized && !is_depreciated {
        return Err(TechnoError::no_financing_mode(family, name, subtype));
    }
    Ok(())
}

/// Checks that a storage charging segment does not carry an all-positive
/// variable cost profile in any defined category.
///
/// Only runs for `Family::Storage` with subtype [`CHARGE_SUBTYPE`]. Empty
/// profiles are skipped: an undefined category is not a violation.
fn check_storage_charge_costs<E: EconomicParams>(
    family: Family,
    name: &str,
    subtype: &str,
    eco: &E,
) -> Result<(), TechnoError> {
    if family != Family::Storage || subtype != CHARGE_SUBTYPE {
        return Ok(());
    }
    for category in CostCategory::ALL {
        let profile = eco.variable_cost(category);
        if !profile.is_empty() && profile.values().all(|value| *value > 0.0) {
            return Err(TechnoError::all_positive_charge_cost(
                category, family, name, subtype,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gridmix_params::YearSeries;

    use super::*;
    use crate::error::TechnoErrorKind;

    /// Hand-written economic collaborator whose predicates and cost
    /// profiles are set directly, consistent or not.
    #[derive(Debug, Default)]
    struct StubEco {
        cap: bool,
        dep: bool,
        om: YearSeries,
        fuel: YearSeries,
    }

    impl EconomicParams for StubEco {
        fn is_capitalized(&self) -> bool {
            self.cap
        }

        fn is_depreciated(&self) -> bool {
            self.dep
        }

        fn var_om(&self) -> YearSeries {
            self.om.clone()
        }

        fn var_fuel(&self) -> YearSeries {
            self.fuel.clone()
        }
    }

    #[derive(Debug)]
    struct StubTech;

    impl TechnicalParams for StubTech {}

    fn capitalized() -> StubEco {
        StubEco {
            cap: true,
            ..StubEco::default()
        }
    }

    fn series(pairs: &[(i32, f64)]) -> YearSeries {
        pairs.iter().copied().collect()
    }

    #[test]
    fn valid_construction_succeeds() {
        let techno = Techno::new(
            Family::Dispatchable,
            "nuclear",
            "new",
            capitalized(),
            StubTech,
            (),
        )
        .expect("consistent configuration");
        assert_eq!(techno.family(), Family::Dispatchable);
        assert_eq!(techno.name(), "nuclear");
        assert_eq!(techno.subtype(), "new");
    }

    #[test]
    fn both_financing_modes_is_rejected() {
        let eco = StubEco {
            cap: true,
            dep: true,
            ..StubEco::default()
        };
        let error = Techno::new(Family::Dispatchable, "gas", "ccgt", eco, StubTech, ())
            .expect_err("both modes set");
        assert_eq!(error.kind(), TechnoErrorKind::BothFinancingModes);
        assert_eq!(error.name(), "gas");
    }

    #[test]
    fn no_financing_mode_is_rejected_with_traceable_message() {
        let error = Techno::new(
            Family::Dispatchable,
            "gas",
            "ocgt",
            StubEco::default(),
            StubTech,
            (),
        )
        .expect_err("no mode set");
        assert_eq!(error.kind(), TechnoErrorKind::NoFinancingMode);
        let message = error.to_string();
        assert!(message.contains("dispatchable"));
        assert!(message.contains("gas"));
        assert!(message.contains("ocgt"));
    }

    #[test]
    fn collaborator_declaring_no_capability_is_rejected_as_no_mode() {
        #[derive(Debug)]
        struct Bare;

        impl EconomicParams for Bare {}

        let error = Techno::new(Family::Fatal, "wind", "onshore", Bare, StubTech, ())
            .expect_err("defaults report neither mode");
        assert_eq!(error.kind(), TechnoErrorKind::NoFinancingMode);
    }

    #[test]
    fn charge_segment_with_all_positive_om_is_rejected() {
        let eco = StubEco {
            om: series(&[(2030, 5.0), (2040, 3.0)]),
            ..capitalized()
        };
        let error = Techno::new(Family::Storage, "battery", "charge", eco, StubTech, ())
            .expect_err("all-positive OM on a charging segment");
        assert_eq!(
            error.kind(),
            TechnoErrorKind::AllPositiveChargeCost(CostCategory::Om)
        );
    }

    #[test]
    fn charge_segment_with_mixed_sign_om_is_accepted() {
        let eco = StubEco {
            om: series(&[(2030, -1.0), (2040, 3.0)]),
            ..capitalized()
        };
        let result = Techno::new(Family::Storage, "battery", "charge", eco, StubTech, ());
        assert!(result.is_ok());
    }

    #[test]
    fn charge_segment_with_empty_profiles_is_accepted() {
        let result = Techno::new(
            Family::Storage,
            "battery",
            "charge",
            capitalized(),
            StubTech,
            (),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn discharge_segment_skips_the_charge_cost_check() {
        let eco = StubEco {
            om: series(&[(2030, 5.0)]),
            ..capitalized()
        };
        let result = Techno::new(Family::Storage, "battery", "discharge", eco, StubTech, ());
        assert!(result.is_ok());
    }

    #[test]
    fn non_storage_families_skip_the_charge_cost_check() {
        let eco = StubEco {
            om: series(&[(2030, 5.0)]),
            ..capitalized()
        };
        let result = Techno::new(Family::Dispatchable, "gas", "charge", eco, StubTech, ());
        assert!(result.is_ok());
    }

    #[test]
    fn financing_check_runs_before_charge_cost_check() {
        let eco = StubEco {
            om: series(&[(2030, 5.0)]),
            ..StubEco::default()
        };
        let error = Techno::new(Family::Storage, "battery", "charge", eco, StubTech, ())
            .expect_err("both checks would fail");
        assert_eq!(error.kind(), TechnoErrorKind::NoFinancingMode);
    }

    #[test]
    fn charge_segment_with_negative_fuel_cost_is_accepted() {
        let eco = StubEco {
            fuel: series(&[(2030, -2.5)]),
            ..capitalized()
        };
        let techno = Techno::new(Family::Storage, "battery", "charge", eco, StubTech, ())
            .expect("fuel profile includes a non-positive value");
        assert_eq!(techno.family(), Family::Storage);
    }

    #[test]
    fn spec_params_setter_is_a_plain_overwrite() {
        let mut techno = Techno::new(
            Family::Dispatchable,
            "gas",
            "ccgt",
            capitalized(),
            StubTech,
            1_u32,
        )
        .expect("consistent configuration");
        techno.set_spec_params(2_u32);
        assert_eq!(*techno.spec_params(), 2);
    }

    #[test]
    fn rejected_economic_params_leave_descriptor_unchanged() {
        let mut techno = Techno::new(
            Family::Dispatchable,
            "gas",
            "ccgt",
            capitalized(),
            StubTech,
            (),
        )
        .expect("consistent configuration");
        let error = techno
            .set_economic_params(StubEco::default())
            .expect_err("no financing mode");
        assert_eq!(error.kind(), TechnoErrorKind::NoFinancingMode);
        assert!(techno.economic_params().is_capitalized());
    }

    #[test]
    fn rejected_subtype_change_leaves_descriptor_unchanged() {
        let eco = StubEco {
            om: series(&[(2030, 5.0)]),
            ..capitalized()
        };
        let mut techno = Techno::new(Family::Storage, "battery", "discharge", eco, StubTech, ())
            .expect("discharge segment is unconstrained");
        let error = techno
            .set_subtype(CHARGE_SUBTYPE)
            .expect_err("all-positive OM under the charge subtype");
        assert_eq!(
            error.kind(),
            TechnoErrorKind::AllPositiveChargeCost(CostCategory::Om)
        );
        assert_eq!(techno.subtype(), "discharge");
    }

    #[test]
    fn family_change_is_revalidated() {
        let eco = StubEco {
            om: series(&[(2030, 5.0)]),
            ..capitalized()
        };
        let mut techno = Techno::new(Family::Dispatchable, "battery", "charge", eco, StubTech, ())
            .expect("charge check does not apply outside storage");
        let error = techno
            .set_family(Family::Storage)
            .expect_err("charge check applies under storage");
        assert_eq!(
            error.kind(),
            TechnoErrorKind::AllPositiveChargeCost(CostCategory::Om)
        );
        assert_eq!(techno.family(), Family::Dispatchable);
    }

    #[test]
    fn describe_reports_identity_and_skips_missing_summaries() {
        let techno = Techno::new(
            Family::Dispatchable,
            "nuclear",
            "hist",
            capitalized(),
            StubTech,
            (),
        )
        .expect("consistent configuration");
        let text = techno.describe();
        assert!(text.contains("name    : nuclear"));
        assert!(text.contains("family  : dispatchable"));
        assert!(text.contains("subtype : hist"));
        // StubEco and StubTech provide no summaries.
        assert!(!text.contains("eco     :"));
        assert!(!text.contains("tech    :"));
    }
}
