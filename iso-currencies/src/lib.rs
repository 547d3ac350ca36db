//! ISO 4217 Currency Table with Macro-Based Code Generation
//!
//! Every active ISO 4217 alphabetic code, plus the common withdrawn ones
//! (HRK, VEF, LTL, ...), is declared once in the `define_currencies!`
//! invocation at the bottom of this file. The macro
//! generates the [`CurrencyCode`] enum together with its metadata lookups,
//! `Display` and a strict `FromStr`.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     XCG => ("XCG", "532", Some(2), "Caribbean Guilder"),
//! }
//! ```
//!
//! # Example
//! ```
//! use iso_currencies::CurrencyCode;
//!
//! let mad: CurrencyCode = "MAD".parse().unwrap();
//! assert_eq!(mad.numeric(), "504");
//! assert_eq!(mad.minor_units(), Some(2));
//! assert!("usd".parse::<CurrencyCode>().is_err());
//! ```

/// Returned when a string is not a recognised ISO 4217 alphabetic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currency table with auto-generated lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     IDENT => ("CODE", "NUMERIC", minor_units, "Name"),
/// }
/// ```
/// `minor_units` is `Some(n)` for regular currencies and `None` for codes
/// ISO lists as "N.A." (precious metals, testing and no-currency codes).
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $numeric:literal, $minor:expr, $label:literal)
        ),* $(,)?
    ) => {
        /// An ISO 4217 alphabetic currency code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize, utoipa::ToSchema,
        )]
        pub enum CurrencyCode {
            $(
                #[doc = $label]
                $name
            ),*
        }

        impl CurrencyCode {
            /// Three-letter alphabetic code.
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            /// Three-digit numeric code, zero padded.
            pub fn numeric(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $numeric),*
                }
            }

            /// Number of digits after the decimal separator, if defined.
            pub fn minor_units(&self) -> Option<u8> {
                match self {
                    $(CurrencyCode::$name => $minor),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $label),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        /// Parsing is case-sensitive: ISO codes are upper case only.
        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    AED => ("AED", "784", Some(2), "UAE Dirham"),
    AFN => ("AFN", "971", Some(2), "Afghani"),
    ALL => ("ALL", "008", Some(2), "Lek"),
    AMD => ("AMD", "051", Some(2), "Armenian Dram"),
    ANG => ("ANG", "532", Some(2), "Netherlands Antillean Guilder"),
    AOA => ("AOA", "973", Some(2), "Kwanza"),
    ARS => ("ARS", "032", Some(2), "Argentine Peso"),
    AUD => ("AUD", "036", Some(2), "Australian Dollar"),
    AWG => ("AWG", "533", Some(2), "Aruban Florin"),
    AZN => ("AZN", "944", Some(2), "Azerbaijan Manat"),
    BAM => ("BAM", "977", Some(2), "Convertible Mark"),
    BBD => ("BBD", "052", Some(2), "Barbados Dollar"),
    BDT => ("BDT", "050", Some(2), "Taka"),
    BGN => ("BGN", "975", Some(2), "Bulgarian Lev"),
    BHD => ("BHD", "048", Some(3), "Bahraini Dinar"),
    BIF => ("BIF", "108", Some(0), "Burundi Franc"),
    BMD => ("BMD", "060", Some(2), "Bermudian Dollar"),
    BND => ("BND", "096", Some(2), "Brunei Dollar"),
    BOB => ("BOB", "068", Some(2), "Boliviano"),
    BOV => ("BOV", "984", Some(2), "Mvdol"),
    BRL => ("BRL", "986", Some(2), "Brazilian Real"),
    BSD => ("BSD", "044", Some(2), "Bahamian Dollar"),
    BTN => ("BTN", "064", Some(2), "Ngultrum"),
    BWP => ("BWP", "072", Some(2), "Pula"),
    BYN => ("BYN", "933", Some(2), "Belarusian Ruble"),
    BZD => ("BZD", "084", Some(2), "Belize Dollar"),
    CAD => ("CAD", "124", Some(2), "Canadian Dollar"),
    CDF => ("CDF", "976", Some(2), "Congolese Franc"),
    CHE => ("CHE", "947", Some(2), "WIR Euro"),
    CHF => ("CHF", "756", Some(2), "Swiss Franc"),
    CHW => ("CHW", "948", Some(2), "WIR Franc"),
    CLF => ("CLF", "990", Some(4), "Unidad de Fomento"),
    CLP => ("CLP", "152", Some(0), "Chilean Peso"),
    CNY => ("CNY", "156", Some(2), "Yuan Renminbi"),
    COP => ("COP", "170", Some(2), "Colombian Peso"),
    COU => ("COU", "970", Some(2), "Unidad de Valor Real"),
    CRC => ("CRC", "188", Some(2), "Costa Rican Colon"),
    CUC => ("CUC", "931", Some(2), "Peso Convertible"),
    CUP => ("CUP", "192", Some(2), "Cuban Peso"),
    CVE => ("CVE", "132", Some(2), "Cabo Verde Escudo"),
    CZK => ("CZK", "203", Some(2), "Czech Koruna"),
    DJF => ("DJF", "262", Some(0), "Djibouti Franc"),
    DKK => ("DKK", "208", Some(2), "Danish Krone"),
    DOP => ("DOP", "214", Some(2), "Dominican Peso"),
    DZD => ("DZD", "012", Some(2), "Algerian Dinar"),
    EGP => ("EGP", "818", Some(2), "Egyptian Pound"),
    ERN => ("ERN", "232", Some(2), "Nakfa"),
    ETB => ("ETB", "230", Some(2), "Ethiopian Birr"),
    EUR => ("EUR", "978", Some(2), "Euro"),
    FJD => ("FJD", "242", Some(2), "Fiji Dollar"),
    FKP => ("FKP", "238", Some(2), "Falkland Islands Pound"),
    GBP => ("GBP", "826", Some(2), "Pound Sterling"),
    GEL => ("GEL", "981", Some(2), "Lari"),
    GHS => ("GHS", "936", Some(2), "Ghana Cedi"),
    GIP => ("GIP", "292", Some(2), "Gibraltar Pound"),
    GMD => ("GMD", "270", Some(2), "Dalasi"),
    GNF => ("GNF", "324", Some(0), "Guinean Franc"),
    GTQ => ("GTQ", "320", Some(2), "Quetzal"),
    GYD => ("GYD", "328", Some(2), "Guyana Dollar"),
    HKD => ("HKD", "344", Some(2), "Hong Kong Dollar"),
    HNL => ("HNL", "340", Some(2), "Lempira"),
    HTG => ("HTG", "332", Some(2), "Gourde"),
    HUF => ("HUF", "348", Some(2), "Forint"),
    IDR => ("IDR", "360", Some(2), "Rupiah"),
    ILS => ("ILS", "376", Some(2), "New Israeli Sheqel"),
    INR => ("INR", "356", Some(2), "Indian Rupee"),
    IQD => ("IQD", "368", Some(3), "Iraqi Dinar"),
    IRR => ("IRR", "364", Some(2), "Iranian Rial"),
    ISK => ("ISK", "352", Some(0), "Iceland Krona"),
    JMD => ("JMD", "388", Some(2), "Jamaican Dollar"),
    JOD => ("JOD", "400", Some(3), "Jordanian Dinar"),
    JPY => ("JPY", "392", Some(0), "Yen"),
    KES => ("KES", "404", Some(2), "Kenyan Shilling"),
    KGS => ("KGS", "417", Some(2), "Som"),
    KHR => ("KHR", "116", Some(2), "Riel"),
    KMF => ("KMF", "174", Some(0), "Comorian Franc"),
    KPW => ("KPW", "408", Some(2), "North Korean Won"),
    KRW => ("KRW", "410", Some(0), "Won"),
    KWD => ("KWD", "414", Some(3), "Kuwaiti Dinar"),
    KYD => ("KYD", "136", Some(2), "Cayman Islands Dollar"),
    KZT => ("KZT", "398", Some(2), "Tenge"),
    LAK => ("LAK", "418", Some(2), "Lao Kip"),
    LBP => ("LBP", "422", Some(2), "Lebanese Pound"),
    LKR => ("LKR", "144", Some(2), "Sri Lanka Rupee"),
    LRD => ("LRD", "430", Some(2), "Liberian Dollar"),
    LSL => ("LSL", "426", Some(2), "Loti"),
    LYD => ("LYD", "434", Some(3), "Libyan Dinar"),
    MAD => ("MAD", "504", Some(2), "Moroccan Dirham"),
    MDL => ("MDL", "498", Some(2), "Moldovan Leu"),
    MGA => ("MGA", "969", Some(2), "Malagasy Ariary"),
    MKD => ("MKD", "807", Some(2), "Denar"),
    MMK => ("MMK", "104", Some(2), "Kyat"),
    MNT => ("MNT", "496", Some(2), "Tugrik"),
    MOP => ("MOP", "446", Some(2), "Pataca"),
    MRU => ("MRU", "929", Some(2), "Ouguiya"),
    MUR => ("MUR", "480", Some(2), "Mauritius Rupee"),
    MVR => ("MVR", "462", Some(2), "Rufiyaa"),
    MWK => ("MWK", "454", Some(2), "Malawi Kwacha"),
    MXN => ("MXN", "484", Some(2), "Mexican Peso"),
    MXV => ("MXV", "979", Some(2), "Mexican Unidad de Inversion (UDI)"),
    MYR => ("MYR", "458", Some(2), "Malaysian Ringgit"),
    MZN => ("MZN", "943", Some(2), "Mozambique Metical"),
    NAD => ("NAD", "516", Some(2), "Namibia Dollar"),
    NGN => ("NGN", "566", Some(2), "Naira"),
    NIO => ("NIO", "558", Some(2), "Cordoba Oro"),
    NOK => ("NOK", "578", Some(2), "Norwegian Krone"),
    NPR => ("NPR", "524", Some(2), "Nepalese Rupee"),
    NZD => ("NZD", "554", Some(2), "New Zealand Dollar"),
    OMR => ("OMR", "512", Some(3), "Rial Omani"),
    PAB => ("PAB", "590", Some(2), "Balboa"),
    PEN => ("PEN", "604", Some(2), "Sol"),
    PGK => ("PGK", "598", Some(2), "Kina"),
    PHP => ("PHP", "608", Some(2), "Philippine Peso"),
    PKR => ("PKR", "586", Some(2), "Pakistan Rupee"),
    PLN => ("PLN", "985", Some(2), "Zloty"),
    PYG => ("PYG", "600", Some(0), "Guarani"),
    QAR => ("QAR", "634", Some(2), "Qatari Rial"),
    RON => ("RON", "946", Some(2), "Romanian Leu"),
    RSD => ("RSD", "941", Some(2), "Serbian Dinar"),
    RUB => ("RUB", "643", Some(2), "Russian Ruble"),
    RWF => ("RWF", "646", Some(0), "Rwanda Franc"),
    SAR => ("SAR", "682", Some(2), "Saudi Riyal"),
    SBD => ("SBD", "090", Some(2), "Solomon Islands Dollar"),
    SCR => ("SCR", "690", Some(2), "Seychelles Rupee"),
    SDG => ("SDG", "938", Some(2), "Sudanese Pound"),
    SEK => ("SEK", "752", Some(2), "Swedish Krona"),
    SGD => ("SGD", "702", Some(2), "Singapore Dollar"),
    SHP => ("SHP", "654", Some(2), "Saint Helena Pound"),
    SLE => ("SLE", "925", Some(2), "Leone"),
    SLL => ("SLL", "694", Some(2), "Leone (old)"),
    SOS => ("SOS", "706", Some(2), "Somali Shilling"),
    SRD => ("SRD", "968", Some(2), "Surinam Dollar"),
    SSP => ("SSP", "728", Some(2), "South Sudanese Pound"),
    STN => ("STN", "930", Some(2), "Dobra"),
    SVC => ("SVC", "222", Some(2), "El Salvador Colon"),
    SYP => ("SYP", "760", Some(2), "Syrian Pound"),
    SZL => ("SZL", "748", Some(2), "Lilangeni"),
    THB => ("THB", "764", Some(2), "Baht"),
    TJS => ("TJS", "972", Some(2), "Somoni"),
    TMT => ("TMT", "934", Some(2), "Turkmenistan New Manat"),
    TND => ("TND", "788", Some(3), "Tunisian Dinar"),
    TOP => ("TOP", "776", Some(2), "Pa'anga"),
    TRY => ("TRY", "949", Some(2), "Turkish Lira"),
    TTD => ("TTD", "780", Some(2), "Trinidad and Tobago Dollar"),
    TWD => ("TWD", "901", Some(2), "New Taiwan Dollar"),
    TZS => ("TZS", "834", Some(2), "Tanzanian Shilling"),
    UAH => ("UAH", "980", Some(2), "Hryvnia"),
    UGX => ("UGX", "800", Some(0), "Uganda Shilling"),
    USD => ("USD", "840", Some(2), "US Dollar"),
    USN => ("USN", "997", Some(2), "US Dollar (Next day)"),
    UYI => ("UYI", "940", Some(0), "Uruguay Peso en Unidades Indexadas (UI)"),
    UYU => ("UYU", "858", Some(2), "Peso Uruguayo"),
    UYW => ("UYW", "927", Some(4), "Unidad Previsional"),
    UZS => ("UZS", "860", Some(2), "Uzbekistan Sum"),
    VED => ("VED", "926", Some(2), "Bolivar Soberano (digital)"),
    VES => ("VES", "928", Some(2), "Bolivar Soberano"),
    VND => ("VND", "704", Some(0), "Dong"),
    VUV => ("VUV", "548", Some(0), "Vatu"),
    WST => ("WST", "882", Some(2), "Tala"),
    XAF => ("XAF", "950", Some(0), "CFA Franc BEAC"),
    XAG => ("XAG", "961", None, "Silver"),
    XAU => ("XAU", "959", None, "Gold"),
    XBA => ("XBA", "955", None, "Bond Markets Unit European Composite Unit (EURCO)"),
    XBB => ("XBB", "956", None, "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    XBC => ("XBC", "957", None, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    XBD => ("XBD", "958", None, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    XCD => ("XCD", "951", Some(2), "East Caribbean Dollar"),
    XDR => ("XDR", "960", None, "SDR (Special Drawing Right)"),
    XOF => ("XOF", "952", Some(0), "CFA Franc BCEAO"),
    XPD => ("XPD", "964", None, "Palladium"),
    XPF => ("XPF", "953", Some(0), "CFP Franc"),
    XPT => ("XPT", "962", None, "Platinum"),
    XSU => ("XSU", "994", None, "Sucre"),
    XTS => ("XTS", "963", None, "Code reserved for testing purposes"),
    XUA => ("XUA", "965", None, "ADB Unit of Account"),
    XXX => ("XXX", "999", None, "No currency"),
    YER => ("YER", "886", Some(2), "Yemeni Rial"),
    ZAR => ("ZAR", "710", Some(2), "Rand"),
    ZMW => ("ZMW", "967", Some(2), "Zambian Kwacha"),
    ZWG => ("ZWG", "924", Some(2), "Zimbabwe Gold"),
    ZWL => ("ZWL", "932", Some(2), "Zimbabwe Dollar"),

    // Withdrawn codes, kept so historical deals still import.
    BYR => ("BYR", "974", Some(0), "Belarusian Ruble (2000-2016)"),
    CYP => ("CYP", "196", Some(2), "Cyprus Pound"),
    EEK => ("EEK", "233", Some(2), "Kroon"),
    GHC => ("GHC", "288", Some(2), "Cedi (1967-2007)"),
    HRK => ("HRK", "191", Some(2), "Kuna"),
    LTL => ("LTL", "440", Some(2), "Lithuanian Litas"),
    LVL => ("LVL", "428", Some(2), "Latvian Lats"),
    MRO => ("MRO", "478", Some(2), "Ouguiya (1973-2017)"),
    MTL => ("MTL", "470", Some(2), "Maltese Lira"),
    ROL => ("ROL", "642", Some(2), "Romanian Leu (1952-2005)"),
    SIT => ("SIT", "705", Some(2), "Tolar"),
    SKK => ("SKK", "703", Some(2), "Slovak Koruna"),
    STD => ("STD", "678", Some(2), "Dobra (1977-2017)"),
    TRL => ("TRL", "792", Some(0), "Turkish Lira (1922-2005)"),
    VEF => ("VEF", "937", Some(2), "Bolivar Fuerte"),
    ZMK => ("ZMK", "894", Some(2), "Zambian Kwacha (1968-2012)"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
