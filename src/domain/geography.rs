//! Country-to-continent resolution for the reporting region feature.
//!
//! The model was trained with an `UNK` continent bucket, so resolution is
//! a total function: any name the table does not know falls back to
//! [`Continent::Unknown`] instead of failing the request.

/// Reporting continent, as the encoder was fitted on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Unknown,
}

impl Continent {
    pub const ALL: [Self; 7] = [
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Oceania,
        Self::Unknown,
    ];

    /// Encoder code for this continent.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
            Self::Unknown => "UNK",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a country display name to its continent. Total: unrecognized
/// names (typos, territories not in the table, empty input) resolve to
/// [`Continent::Unknown`].
#[must_use]
pub fn country_to_continent(name: &str) -> Continent {
    match name.trim() {
        "Algeria" | "Angola" | "Benin" | "Botswana" | "Burkina Faso" | "Burundi"
        | "Cabo Verde" | "Cameroon" | "Central African Republic" | "Chad" | "Comoros"
        | "Congo" | "Democratic Republic of the Congo" | "Djibouti" | "Egypt"
        | "Equatorial Guinea" | "Eritrea" | "Eswatini" | "Ethiopia" | "Gabon" | "Gambia"
        | "Ghana" | "Guinea" | "Guinea-Bissau" | "Ivory Coast" | "Kenya" | "Lesotho"
        | "Liberia" | "Libya" | "Madagascar" | "Malawi" | "Mali" | "Mauritania"
        | "Mauritius" | "Morocco" | "Mozambique" | "Namibia" | "Niger" | "Nigeria"
        | "Rwanda" | "Sao Tome and Principe" | "Senegal" | "Seychelles" | "Sierra Leone"
        | "Somalia" | "South Africa" | "South Sudan" | "Sudan" | "Tanzania" | "Togo"
        | "Tunisia" | "Uganda" | "Zambia" | "Zimbabwe" => Continent::Africa,

        "Afghanistan" | "Armenia" | "Azerbaijan" | "Bahrain" | "Bangladesh" | "Bhutan"
        | "Brunei" | "Cambodia" | "China" | "Cyprus" | "Georgia" | "Hong Kong" | "India"
        | "Indonesia" | "Iran" | "Iraq" | "Israel" | "Japan" | "Jordan" | "Kazakhstan"
        | "Kuwait" | "Kyrgyzstan" | "Laos" | "Lebanon" | "Malaysia" | "Maldives"
        | "Mongolia" | "Myanmar" | "Nepal" | "North Korea" | "Oman" | "Pakistan"
        | "Philippines" | "Qatar" | "Saudi Arabia" | "Singapore" | "South Korea"
        | "Sri Lanka" | "Syria" | "Taiwan" | "Tajikistan" | "Thailand" | "Timor-Leste"
        | "Turkey" | "Turkmenistan" | "United Arab Emirates" | "Uzbekistan" | "Vietnam"
        | "Yemen" => Continent::Asia,

        "Albania" | "Andorra" | "Austria" | "Belarus" | "Belgium"
        | "Bosnia and Herzegovina" | "Bulgaria" | "Croatia" | "Czechia" | "Denmark"
        | "Estonia" | "Finland" | "France" | "Germany" | "Greece" | "Hungary" | "Iceland"
        | "Ireland" | "Italy" | "Latvia" | "Liechtenstein" | "Lithuania" | "Luxembourg"
        | "Malta" | "Moldova" | "Monaco" | "Montenegro" | "Netherlands"
        | "North Macedonia" | "Norway" | "Poland" | "Portugal" | "Romania" | "Russia"
        | "San Marino" | "Serbia" | "Slovakia" | "Slovenia" | "Spain" | "Sweden"
        | "Switzerland" | "Ukraine" | "United Kingdom" => Continent::Europe,

        "Antigua and Barbuda" | "Bahamas" | "Barbados" | "Belize" | "Canada"
        | "Costa Rica" | "Cuba" | "Dominica" | "Dominican Republic" | "El Salvador"
        | "Grenada" | "Guatemala" | "Haiti" | "Honduras" | "Jamaica" | "Mexico"
        | "Nicaragua" | "Panama" | "Puerto Rico" | "Saint Kitts and Nevis"
        | "Saint Lucia" | "Saint Vincent and the Grenadines" | "Trinidad and Tobago"
        | "United States" => Continent::NorthAmerica,

        "Argentina" | "Bolivia" | "Brazil" | "Chile" | "Colombia" | "Ecuador" | "Guyana"
        | "Paraguay" | "Peru" | "Suriname" | "Uruguay" | "Venezuela" => {
            Continent::SouthAmerica
        }

        "Australia" | "Fiji" | "Kiribati" | "Marshall Islands" | "Micronesia" | "Nauru"
        | "New Zealand" | "Palau" | "Papua New Guinea" | "Samoa" | "Solomon Islands"
        | "Tonga" | "Tuvalu" | "Vanuatu" => Continent::Oceania,

        _ => Continent::Unknown,
    }
}

/// Countries offered by the form, alphabetical.
pub const COUNTRIES: [&str; 196] = [
    "Afghanistan",
    "Albania",
    "Algeria",
    "Andorra",
    "Angola",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bhutan",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Botswana",
    "Brazil",
    "Brunei",
    "Bulgaria",
    "Burkina Faso",
    "Burundi",
    "Cabo Verde",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Central African Republic",
    "Chad",
    "Chile",
    "China",
    "Colombia",
    "Comoros",
    "Congo",
    "Costa Rica",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Czechia",
    "Democratic Republic of the Congo",
    "Denmark",
    "Djibouti",
    "Dominica",
    "Dominican Republic",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Equatorial Guinea",
    "Eritrea",
    "Estonia",
    "Eswatini",
    "Ethiopia",
    "Fiji",
    "Finland",
    "France",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Greece",
    "Grenada",
    "Guatemala",
    "Guinea",
    "Guinea-Bissau",
    "Guyana",
    "Haiti",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Israel",
    "Italy",
    "Ivory Coast",
    "Jamaica",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kiribati",
    "Kuwait",
    "Kyrgyzstan",
    "Laos",
    "Latvia",
    "Lebanon",
    "Lesotho",
    "Liberia",
    "Libya",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Maldives",
    "Mali",
    "Malta",
    "Marshall Islands",
    "Mauritania",
    "Mauritius",
    "Mexico",
    "Micronesia",
    "Moldova",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Morocco",
    "Mozambique",
    "Myanmar",
    "Namibia",
    "Nauru",
    "Nepal",
    "Netherlands",
    "New Zealand",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "North Korea",
    "North Macedonia",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Panama",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Romania",
    "Russia",
    "Rwanda",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Samoa",
    "San Marino",
    "Sao Tome and Principe",
    "Saudi Arabia",
    "Senegal",
    "Serbia",
    "Seychelles",
    "Sierra Leone",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "Solomon Islands",
    "Somalia",
    "South Africa",
    "South Korea",
    "South Sudan",
    "Spain",
    "Sri Lanka",
    "Sudan",
    "Suriname",
    "Sweden",
    "Switzerland",
    "Syria",
    "Taiwan",
    "Tajikistan",
    "Tanzania",
    "Thailand",
    "Timor-Leste",
    "Togo",
    "Tonga",
    "Trinidad and Tobago",
    "Tunisia",
    "Turkey",
    "Turkmenistan",
    "Tuvalu",
    "Uganda",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Venezuela",
    "Vietnam",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];

/// Index of the form's preselected country.
#[must_use]
pub fn default_country_index() -> usize {
    COUNTRIES
        .iter()
        .position(|c| *c == "United States")
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_total() {
        // Arbitrary garbage resolves, never panics or errors.
        for input in ["", "Atlantis", "   ", "united states", "US", "🌍"] {
            let continent = country_to_continent(input);
            assert_eq!(continent, Continent::Unknown);
        }
        // And every known country resolves to a non-catch-all bucket.
        for country in COUNTRIES {
            assert_ne!(
                country_to_continent(country),
                Continent::Unknown,
                "{country} missing from the continent table"
            );
        }
    }

    #[test]
    fn test_known_resolutions() {
        assert_eq!(country_to_continent("United States"), Continent::NorthAmerica);
        assert_eq!(country_to_continent("Germany"), Continent::Europe);
        assert_eq!(country_to_continent("Japan"), Continent::Asia);
        assert_eq!(country_to_continent("Nigeria"), Continent::Africa);
        assert_eq!(country_to_continent("Brazil"), Continent::SouthAmerica);
        assert_eq!(country_to_continent("New Zealand"), Continent::Oceania);
        // Leading/trailing whitespace is tolerated.
        assert_eq!(country_to_continent(" Canada "), Continent::NorthAmerica);
    }

    #[test]
    fn test_default_country() {
        assert_eq!(COUNTRIES[default_country_index()], "United States");
    }

    #[test]
    fn test_continent_codes() {
        let codes: Vec<&str> = Continent::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            [
                "Africa",
                "Asia",
                "Europe",
                "North America",
                "South America",
                "Oceania",
                "UNK"
            ]
        );
    }
}
