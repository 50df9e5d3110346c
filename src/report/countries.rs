//! ISO 3166-1 country table used to resolve ISRC country prefixes.

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
}

impl Country {
    const fn new(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> Self {
        Self {
            alpha2,
            alpha3,
            name,
        }
    }
}

/// Prefixes allocated by the ISRC agency outside ISO 3166-1 that stand for
/// an ISO country.
const ISRC_ALIASES: &[(&str, &str)] = &[("QM", "US"), ("QT", "US"), ("QZ", "US"), ("UK", "GB")];

/// Sorted by `alpha2` so lookups can binary search.
pub const COUNTRIES: &[Country] = &[
    Country::new("AD", "AND", "Andorra"),
    Country::new("AE", "ARE", "United Arab Emirates"),
    Country::new("AF", "AFG", "Afghanistan"),
    Country::new("AG", "ATG", "Antigua and Barbuda"),
    Country::new("AI", "AIA", "Anguilla"),
    Country::new("AL", "ALB", "Albania"),
    Country::new("AM", "ARM", "Armenia"),
    Country::new("AO", "AGO", "Angola"),
    Country::new("AQ", "ATA", "Antarctica"),
    Country::new("AR", "ARG", "Argentina"),
    Country::new("AS", "ASM", "American Samoa"),
    Country::new("AT", "AUT", "Austria"),
    Country::new("AU", "AUS", "Australia"),
    Country::new("AW", "ABW", "Aruba"),
    Country::new("AX", "ALA", "Aland Islands"),
    Country::new("AZ", "AZE", "Azerbaijan"),
    Country::new("BA", "BIH", "Bosnia and Herzegovina"),
    Country::new("BB", "BRB", "Barbados"),
    Country::new("BD", "BGD", "Bangladesh"),
    Country::new("BE", "BEL", "Belgium"),
    Country::new("BF", "BFA", "Burkina Faso"),
    Country::new("BG", "BGR", "Bulgaria"),
    Country::new("BH", "BHR", "Bahrain"),
    Country::new("BI", "BDI", "Burundi"),
    Country::new("BJ", "BEN", "Benin"),
    Country::new("BL", "BLM", "Saint Barthelemy"),
    Country::new("BM", "BMU", "Bermuda"),
    Country::new("BN", "BRN", "Brunei Darussalam"),
    Country::new("BO", "BOL", "Bolivia"),
    Country::new("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    Country::new("BR", "BRA", "Brazil"),
    Country::new("BS", "BHS", "Bahamas"),
    Country::new("BT", "BTN", "Bhutan"),
    Country::new("BV", "BVT", "Bouvet Island"),
    Country::new("BW", "BWA", "Botswana"),
    Country::new("BY", "BLR", "Belarus"),
    Country::new("BZ", "BLZ", "Belize"),
    Country::new("CA", "CAN", "Canada"),
    Country::new("CC", "CCK", "Cocos (Keeling) Islands"),
    Country::new("CD", "COD", "Congo, Democratic Republic of the"),
    Country::new("CF", "CAF", "Central African Republic"),
    Country::new("CG", "COG", "Congo"),
    Country::new("CH", "CHE", "Switzerland"),
    Country::new("CI", "CIV", "Cote d'Ivoire"),
    Country::new("CK", "COK", "Cook Islands"),
    Country::new("CL", "CHL", "Chile"),
    Country::new("CM", "CMR", "Cameroon"),
    Country::new("CN", "CHN", "China"),
    Country::new("CO", "COL", "Colombia"),
    Country::new("CR", "CRI", "Costa Rica"),
    Country::new("CU", "CUB", "Cuba"),
    Country::new("CV", "CPV", "Cabo Verde"),
    Country::new("CW", "CUW", "Curacao"),
    Country::new("CX", "CXR", "Christmas Island"),
    Country::new("CY", "CYP", "Cyprus"),
    Country::new("CZ", "CZE", "Czechia"),
    Country::new("DE", "DEU", "Germany"),
    Country::new("DJ", "DJI", "Djibouti"),
    Country::new("DK", "DNK", "Denmark"),
    Country::new("DM", "DMA", "Dominica"),
    Country::new("DO", "DOM", "Dominican Republic"),
    Country::new("DZ", "DZA", "Algeria"),
    Country::new("EC", "ECU", "Ecuador"),
    Country::new("EE", "EST", "Estonia"),
    Country::new("EG", "EGY", "Egypt"),
    Country::new("EH", "ESH", "Western Sahara"),
    Country::new("ER", "ERI", "Eritrea"),
    Country::new("ES", "ESP", "Spain"),
    Country::new("ET", "ETH", "Ethiopia"),
    Country::new("FI", "FIN", "Finland"),
    Country::new("FJ", "FJI", "Fiji"),
    Country::new("FK", "FLK", "Falkland Islands (Malvinas)"),
    Country::new("FM", "FSM", "Micronesia, Federated States of"),
    Country::new("FO", "FRO", "Faroe Islands"),
    Country::new("FR", "FRA", "France"),
    Country::new("GA", "GAB", "Gabon"),
    Country::new("GB", "GBR", "United Kingdom"),
    Country::new("GD", "GRD", "Grenada"),
    Country::new("GE", "GEO", "Georgia"),
    Country::new("GF", "GUF", "French Guiana"),
    Country::new("GG", "GGY", "Guernsey"),
    Country::new("GH", "GHA", "Ghana"),
    Country::new("GI", "GIB", "Gibraltar"),
    Country::new("GL", "GRL", "Greenland"),
    Country::new("GM", "GMB", "Gambia"),
    Country::new("GN", "GIN", "Guinea"),
    Country::new("GP", "GLP", "Guadeloupe"),
    Country::new("GQ", "GNQ", "Equatorial Guinea"),
    Country::new("GR", "GRC", "Greece"),
    Country::new("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    Country::new("GT", "GTM", "Guatemala"),
    Country::new("GU", "GUM", "Guam"),
    Country::new("GW", "GNB", "Guinea-Bissau"),
    Country::new("GY", "GUY", "Guyana"),
    Country::new("HK", "HKG", "Hong Kong"),
    Country::new("HM", "HMD", "Heard Island and McDonald Islands"),
    Country::new("HN", "HND", "Honduras"),
    Country::new("HR", "HRV", "Croatia"),
    Country::new("HT", "HTI", "Haiti"),
    Country::new("HU", "HUN", "Hungary"),
    Country::new("ID", "IDN", "Indonesia"),
    Country::new("IE", "IRL", "Ireland"),
    Country::new("IL", "ISR", "Israel"),
    Country::new("IM", "IMN", "Isle of Man"),
    Country::new("IN", "IND", "India"),
    Country::new("IO", "IOT", "British Indian Ocean Territory"),
    Country::new("IQ", "IRQ", "Iraq"),
    Country::new("IR", "IRN", "Iran"),
    Country::new("IS", "ISL", "Iceland"),
    Country::new("IT", "ITA", "Italy"),
    Country::new("JE", "JEY", "Jersey"),
    Country::new("JM", "JAM", "Jamaica"),
    Country::new("JO", "JOR", "Jordan"),
    Country::new("JP", "JPN", "Japan"),
    Country::new("KE", "KEN", "Kenya"),
    Country::new("KG", "KGZ", "Kyrgyzstan"),
    Country::new("KH", "KHM", "Cambodia"),
    Country::new("KI", "KIR", "Kiribati"),
    Country::new("KM", "COM", "Comoros"),
    Country::new("KN", "KNA", "Saint Kitts and Nevis"),
    Country::new("KP", "PRK", "Korea, Democratic People's Republic of"),
    Country::new("KR", "KOR", "Korea, Republic of"),
    Country::new("KW", "KWT", "Kuwait"),
    Country::new("KY", "CYM", "Cayman Islands"),
    Country::new("KZ", "KAZ", "Kazakhstan"),
    Country::new("LA", "LAO", "Lao People's Democratic Republic"),
    Country::new("LB", "LBN", "Lebanon"),
    Country::new("LC", "LCA", "Saint Lucia"),
    Country::new("LI", "LIE", "Liechtenstein"),
    Country::new("LK", "LKA", "Sri Lanka"),
    Country::new("LR", "LBR", "Liberia"),
    Country::new("LS", "LSO", "Lesotho"),
    Country::new("LT", "LTU", "Lithuania"),
    Country::new("LU", "LUX", "Luxembourg"),
    Country::new("LV", "LVA", "Latvia"),
    Country::new("LY", "LBY", "Libya"),
    Country::new("MA", "MAR", "Morocco"),
    Country::new("MC", "MCO", "Monaco"),
    Country::new("MD", "MDA", "Moldova"),
    Country::new("ME", "MNE", "Montenegro"),
    Country::new("MF", "MAF", "Saint Martin (French part)"),
    Country::new("MG", "MDG", "Madagascar"),
    Country::new("MH", "MHL", "Marshall Islands"),
    Country::new("MK", "MKD", "North Macedonia"),
    Country::new("ML", "MLI", "Mali"),
    Country::new("MM", "MMR", "Myanmar"),
    Country::new("MN", "MNG", "Mongolia"),
    Country::new("MO", "MAC", "Macao"),
    Country::new("MP", "MNP", "Northern Mariana Islands"),
    Country::new("MQ", "MTQ", "Martinique"),
    Country::new("MR", "MRT", "Mauritania"),
    Country::new("MS", "MSR", "Montserrat"),
    Country::new("MT", "MLT", "Malta"),
    Country::new("MU", "MUS", "Mauritius"),
    Country::new("MV", "MDV", "Maldives"),
    Country::new("MW", "MWI", "Malawi"),
    Country::new("MX", "MEX", "Mexico"),
    Country::new("MY", "MYS", "Malaysia"),
    Country::new("MZ", "MOZ", "Mozambique"),
    Country::new("NA", "NAM", "Namibia"),
    Country::new("NC", "NCL", "New Caledonia"),
    Country::new("NE", "NER", "Niger"),
    Country::new("NF", "NFK", "Norfolk Island"),
    Country::new("NG", "NGA", "Nigeria"),
    Country::new("NI", "NIC", "Nicaragua"),
    Country::new("NL", "NLD", "Netherlands"),
    Country::new("NO", "NOR", "Norway"),
    Country::new("NP", "NPL", "Nepal"),
    Country::new("NR", "NRU", "Nauru"),
    Country::new("NU", "NIU", "Niue"),
    Country::new("NZ", "NZL", "New Zealand"),
    Country::new("OM", "OMN", "Oman"),
    Country::new("PA", "PAN", "Panama"),
    Country::new("PE", "PER", "Peru"),
    Country::new("PF", "PYF", "French Polynesia"),
    Country::new("PG", "PNG", "Papua New Guinea"),
    Country::new("PH", "PHL", "Philippines"),
    Country::new("PK", "PAK", "Pakistan"),
    Country::new("PL", "POL", "Poland"),
    Country::new("PM", "SPM", "Saint Pierre and Miquelon"),
    Country::new("PN", "PCN", "Pitcairn"),
    Country::new("PR", "PRI", "Puerto Rico"),
    Country::new("PS", "PSE", "Palestine, State of"),
    Country::new("PT", "PRT", "Portugal"),
    Country::new("PW", "PLW", "Palau"),
    Country::new("PY", "PRY", "Paraguay"),
    Country::new("QA", "QAT", "Qatar"),
    Country::new("RE", "REU", "Reunion"),
    Country::new("RO", "ROU", "Romania"),
    Country::new("RS", "SRB", "Serbia"),
    Country::new("RU", "RUS", "Russian Federation"),
    Country::new("RW", "RWA", "Rwanda"),
    Country::new("SA", "SAU", "Saudi Arabia"),
    Country::new("SB", "SLB", "Solomon Islands"),
    Country::new("SC", "SYC", "Seychelles"),
    Country::new("SD", "SDN", "Sudan"),
    Country::new("SE", "SWE", "Sweden"),
    Country::new("SG", "SGP", "Singapore"),
    Country::new("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    Country::new("SI", "SVN", "Slovenia"),
    Country::new("SJ", "SJM", "Svalbard and Jan Mayen"),
    Country::new("SK", "SVK", "Slovakia"),
    Country::new("SL", "SLE", "Sierra Leone"),
    Country::new("SM", "SMR", "San Marino"),
    Country::new("SN", "SEN", "Senegal"),
    Country::new("SO", "SOM", "Somalia"),
    Country::new("SR", "SUR", "Suriname"),
    Country::new("SS", "SSD", "South Sudan"),
    Country::new("ST", "STP", "Sao Tome and Principe"),
    Country::new("SV", "SLV", "El Salvador"),
    Country::new("SX", "SXM", "Sint Maarten (Dutch part)"),
    Country::new("SY", "SYR", "Syrian Arab Republic"),
    Country::new("SZ", "SWZ", "Eswatini"),
    Country::new("TC", "TCA", "Turks and Caicos Islands"),
    Country::new("TD", "TCD", "Chad"),
    Country::new("TF", "ATF", "French Southern Territories"),
    Country::new("TG", "TGO", "Togo"),
    Country::new("TH", "THA", "Thailand"),
    Country::new("TJ", "TJK", "Tajikistan"),
    Country::new("TK", "TKL", "Tokelau"),
    Country::new("TL", "TLS", "Timor-Leste"),
    Country::new("TM", "TKM", "Turkmenistan"),
    Country::new("TN", "TUN", "Tunisia"),
    Country::new("TO", "TON", "Tonga"),
    Country::new("TR", "TUR", "Turkey"),
    Country::new("TT", "TTO", "Trinidad and Tobago"),
    Country::new("TV", "TUV", "Tuvalu"),
    Country::new("TW", "TWN", "Taiwan"),
    Country::new("TZ", "TZA", "Tanzania, United Republic of"),
    Country::new("UA", "UKR", "Ukraine"),
    Country::new("UG", "UGA", "Uganda"),
    Country::new("UM", "UMI", "United States Minor Outlying Islands"),
    Country::new("US", "USA", "United States"),
    Country::new("UY", "URY", "Uruguay"),
    Country::new("UZ", "UZB", "Uzbekistan"),
    Country::new("VA", "VAT", "Holy See"),
    Country::new("VC", "VCT", "Saint Vincent and the Grenadines"),
    Country::new("VE", "VEN", "Venezuela"),
    Country::new("VG", "VGB", "Virgin Islands (British)"),
    Country::new("VI", "VIR", "Virgin Islands (U.S.)"),
    Country::new("VN", "VNM", "Viet Nam"),
    Country::new("VU", "VUT", "Vanuatu"),
    Country::new("WF", "WLF", "Wallis and Futuna"),
    Country::new("WS", "WSM", "Samoa"),
    Country::new("YE", "YEM", "Yemen"),
    Country::new("YT", "MYT", "Mayotte"),
    Country::new("ZA", "ZAF", "South Africa"),
    Country::new("ZM", "ZMB", "Zambia"),
    Country::new("ZW", "ZWE", "Zimbabwe"),
];

/// Resolve an ISRC country prefix (case-insensitive) to its country.
#[must_use]
pub fn lookup(prefix: &str) -> Option<&'static Country> {
    let upper = prefix.to_ascii_uppercase();
    let code = ISRC_ALIASES
        .iter()
        .find(|(alias, _)| *alias == upper)
        .map_or(upper.as_str(), |(_, iso)| *iso);

    COUNTRIES
        .binary_search_by(|c| c.alpha2.cmp(code))
        .ok()
        .map(|idx| &COUNTRIES[idx])
}

#[cfg(test)]
#[path = "countries_tests.rs"]
mod tests;
