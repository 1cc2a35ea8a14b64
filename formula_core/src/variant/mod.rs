//! Variant selection - shelling type, AP shell tier and cut-in families

mod anti_air_cutin;
mod ap_shell;
mod day_cutin;
mod night_cutin;
mod rates;
mod selector;
mod shelling_type;

pub use anti_air_cutin::{anti_air_cutin_rates, AntiAirCutin, AntiAirCutinContext};
pub use ap_shell::{ap_shell_modifiers, ApShellContext, ApShellModifiers};
pub use day_cutin::{day_cutin_rates, DayCutin, DayCutinContext, ObservationTerm};
pub use night_cutin::{
    night_cutin_base_term, night_cutin_rates, night_cutin_term, NightCutin, NightCutinContext,
    NightSituation,
};
pub use rates::{CutinRate, CutinRates};
pub use selector::{eligible_variants, select_variant, AttackVariant, Priority, VariantDef};
pub use shelling_type::{shelling_type, ShellingType, ShellingTypeContext};
