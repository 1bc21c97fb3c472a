use serde::{Deserialize, Serialize};

/// Fixed attributes stamped by the census registrar.
///
/// Graduate and faculty registrations do not take these as arguments: every
/// graduate gets the same university and every faculty member the same
/// rank and university nationality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarDefaults {
    /// Name of the faculty-unit singleton, set when it is first created.
    #[serde(default = "default_nombre_facultad")]
    pub nombre_facultad: String,

    /// University recorded for graduates.
    #[serde(default = "default_universidad_graduado")]
    pub universidad_graduado: String,

    /// University nationality recorded for faculty members.
    #[serde(default = "default_nacionalidad_universidad_profesor")]
    pub nacionalidad_universidad_profesor: String,

    /// Rank recorded for faculty members.
    #[serde(default = "default_cargo_profesor")]
    pub cargo_profesor: String,
}

impl Default for RegistrarDefaults {
    fn default() -> Self {
        Self {
            nombre_facultad: default_nombre_facultad(),
            universidad_graduado: default_universidad_graduado(),
            nacionalidad_universidad_profesor: default_nacionalidad_universidad_profesor(),
            cargo_profesor: default_cargo_profesor(),
        }
    }
}

fn default_nombre_facultad() -> String {
    "Facultad de Ciencias Exactas y Naturales".to_string()
}

fn default_universidad_graduado() -> String {
    "UBA".to_string()
}

fn default_nacionalidad_universidad_profesor() -> String {
    "Argentina".to_string()
}

fn default_cargo_profesor() -> String {
    "Regular".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let defaults: RegistrarDefaults =
            serde_json::from_str(r#"{"cargo_profesor": "Adjunto"}"#).unwrap();
        assert_eq!(defaults.cargo_profesor, "Adjunto");
        assert_eq!(defaults.universidad_graduado, "UBA");
        assert_eq!(defaults.nombre_facultad, RegistrarDefaults::default().nombre_facultad);
    }
}
