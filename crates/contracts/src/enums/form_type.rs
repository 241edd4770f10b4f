use serde::{Deserialize, Serialize};

/// Registration form profile assigned to a supplier account at login time.
///
/// When the login payload carries one of these, it overrides any group-based
/// landing inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormType {
    #[serde(rename = "MATERIAL")]
    Material,
    #[serde(rename = "SERVICO")]
    Servico,
    #[serde(rename = "MATERIAL_SERVICO")]
    MaterialServico,
    #[serde(rename = "INTERNO")]
    Interno,
}

impl FormType {
    pub fn code(&self) -> &'static str {
        match self {
            FormType::Material => "MATERIAL",
            FormType::Servico => "SERVICO",
            FormType::MaterialServico => "MATERIAL_SERVICO",
            FormType::Interno => "INTERNO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MATERIAL" => Some(FormType::Material),
            "SERVICO" => Some(FormType::Servico),
            "MATERIAL_SERVICO" => Some(FormType::MaterialServico),
            "INTERNO" => Some(FormType::Interno),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(
            FormType::from_code("MATERIAL_SERVICO"),
            Some(FormType::MaterialServico)
        );
        assert_eq!(FormType::from_code("material"), None);
        assert_eq!(FormType::from_code(""), None);
    }
}
