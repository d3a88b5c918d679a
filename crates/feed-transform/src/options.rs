/// Toggles for the latent vocabulary checks.
///
/// Analysis-type and specimen-type domains are declared but historically not
/// enforced; out-of-vocabulary values flow through silently unless the
/// corresponding pass is switched on here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationOptions {
    pub enforce_analysis_types: bool,
    pub enforce_specimen_types: bool,
}
