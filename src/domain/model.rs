use serde::{Deserialize, Serialize};

/// 缺值時寫入資料庫的預設字串
pub const NOT_AVAILABLE: &str = "N/A";

/// One element of the upstream `/all` payload, before projection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: Option<RawName>,
    pub flags: Option<RawFlags>,
    pub capital: Option<Vec<String>>,
    pub population: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawName {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

/// A projected country that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub name: String,
    pub flag: String,
    pub population: u64,
    pub capital: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub flag: String,
    pub population: u64,
    pub capital: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub name: String,
    pub population: u64,
    pub capital: String,
    pub flag: String,
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl RawCountry {
    /// 將原始資料簡化成儲存格式，每個欄位各自套用預設值
    pub fn project(&self) -> NewCountry {
        let name = or_not_available(self.name.as_ref().and_then(|n| n.common.as_deref()));
        let flag = or_not_available(self.flags.as_ref().and_then(|f| f.png.as_deref()));

        // 只保留第一個首都
        let capital = or_not_available(
            self.capital
                .as_ref()
                .and_then(|caps| caps.first())
                .map(String::as_str),
        );

        NewCountry {
            name,
            flag,
            population: self.population.unwrap_or(0),
            capital,
        }
    }
}

impl From<&Country> for CountrySummary {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            flag: country.flag.clone(),
        }
    }
}

impl From<&Country> for CountryDetail {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            population: country.population,
            capital: country.capital.clone(),
            flag: country.flag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: serde_json::Value) -> RawCountry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_project_full_record() {
        let raw = decode(serde_json::json!({
            "name": {"common": "South Africa", "official": "Republic of South Africa"},
            "flags": {
                "png": "https://flagcdn.com/w320/za.png",
                "svg": "https://flagcdn.com/za.svg",
                "alt": "The flag of South Africa"
            },
            "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
            "population": 59308690
        }));

        let country = raw.project();

        assert_eq!(country.name, "South Africa");
        assert_eq!(country.flag, "https://flagcdn.com/w320/za.png");
        assert_eq!(country.capital, "Pretoria");
        assert_eq!(country.population, 59308690);
    }

    #[test]
    fn test_project_applies_defaults_independently() {
        let raw = decode(serde_json::json!({"population": 0}));

        let country = raw.project();

        assert_eq!(country.name, NOT_AVAILABLE);
        assert_eq!(country.flag, NOT_AVAILABLE);
        assert_eq!(country.capital, NOT_AVAILABLE);
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_project_missing_common_name_and_png() {
        let raw = decode(serde_json::json!({
            "name": {"official": "Antarctica"},
            "flags": {"svg": "https://flagcdn.com/aq.svg"},
            "capital": []
        }));

        let country = raw.project();

        assert_eq!(country.name, NOT_AVAILABLE);
        assert_eq!(country.flag, NOT_AVAILABLE);
        assert_eq!(country.capital, NOT_AVAILABLE);
        assert_eq!(country.population, 0);
    }

    #[test]
    fn test_project_blank_strings_become_not_available() {
        let raw = decode(serde_json::json!({
            "name": {"common": ""},
            "flags": {"png": "   "},
            "capital": [""],
            "population": 12
        }));

        let country = raw.project();

        assert_eq!(country.name, NOT_AVAILABLE);
        assert_eq!(country.flag, NOT_AVAILABLE);
        assert_eq!(country.capital, NOT_AVAILABLE);
        assert_eq!(country.population, 12);
    }

    #[test]
    fn test_negative_population_is_rejected_by_decoding() {
        let result = serde_json::from_value::<RawCountry>(serde_json::json!({
            "name": {"common": "Nowhere"},
            "population": -5
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_output_projections() {
        let country = Country {
            id: 7,
            name: "Nigeria".to_string(),
            flag: "🇳🇬".to_string(),
            population: 70_000_000,
            capital: "Abuja".to_string(),
        };

        let summary = CountrySummary::from(&country);
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({"name": "Nigeria", "flag": "🇳🇬"})
        );

        let detail = CountryDetail::from(&country);
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            serde_json::json!({
                "name": "Nigeria",
                "population": 70000000,
                "capital": "Abuja",
                "flag": "🇳🇬"
            })
        );
    }
}
