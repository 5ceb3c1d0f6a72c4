//! ISO 4217 currency code lookup.

/// Active ISO 4217 alpha-3 codes, including fund codes (BOV, CHE, CHW, CLF,
/// COU, MXV, USN, UYI, XSU, XUA), precious metals (XAG, XAU, XPD, XPT) and
/// the special codes (XBA through XBD, XDR, XTS, XXX).
///
/// Kept sorted so membership is a binary search; a test guards the ordering.
static CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV",
    "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHE", "CHF",
    "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP", "CVE",
    "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD",
    "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD",
    "HNL", "HRK", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK",
    "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD",
    "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL",
    "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN",
    "MXV", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR",
    "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD",
    "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT",
    "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN",
    "UYI", "UYU", "UYW", "UZS", "VES", "VND", "VUV", "WST", "XAF", "XAG",
    "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XDR", "XOF", "XPD", "XPF",
    "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW", "ZWL",
];

/// Whether `code` is an active ISO 4217 alpha-3 currency code.
/// Case-sensitive: only the uppercase form matches.
pub fn is_iso4217(code: &str) -> bool {
    CODES.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(CODES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn common_codes_are_accepted() {
        for code in ["EUR", "USD", "GBP", "JPY", "CHF", "MXN"] {
            assert!(is_iso4217(code), "{code} should be a currency");
        }
    }

    #[test]
    fn fund_and_special_codes_are_accepted() {
        for code in ["BOV", "CHE", "USN", "XAU", "XDR", "XTS", "XXX"] {
            assert!(is_iso4217(code), "{code} should be a currency");
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        for code in ["FAKE", "EU", "EURO", "ABC", ""] {
            assert!(!is_iso4217(code), "{code} should not be a currency");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_iso4217("eur"));
        assert!(!is_iso4217("Usd"));
    }
}
