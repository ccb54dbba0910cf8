//! Currency symbols and price display.

use serde::Serialize;

/// Display metadata for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> Currency {
    Currency { code, symbol, name }
}

static CURRENCIES: &[Currency] = &[
    currency("USD", "$", "US Dollar"),
    currency("EUR", "€", "Euro"),
    currency("GBP", "£", "British Pound"),
    currency("JPY", "¥", "Japanese Yen"),
    currency("CNY", "¥", "Chinese Yuan"),
    currency("INR", "₹", "Indian Rupee"),
    currency("CAD", "C$", "Canadian Dollar"),
    currency("AUD", "A$", "Australian Dollar"),
    currency("NZD", "NZ$", "New Zealand Dollar"),
    currency("HKD", "HK$", "Hong Kong Dollar"),
    currency("SGD", "S$", "Singapore Dollar"),
    currency("BRL", "R$", "Brazilian Real"),
    currency("MXN", "MX$", "Mexican Peso"),
    currency("CHF", "CHF", "Swiss Franc"),
    currency("SEK", "kr", "Swedish Krona"),
    currency("NOK", "kr", "Norwegian Krone"),
    currency("DKK", "kr", "Danish Krone"),
    currency("ISK", "kr", "Icelandic Krona"),
    currency("PLN", "zł", "Polish Zloty"),
    currency("CZK", "Kč", "Czech Koruna"),
    currency("HUF", "Ft", "Hungarian Forint"),
    currency("RON", "lei", "Romanian Leu"),
    currency("BGN", "лв", "Bulgarian Lev"),
    currency("RSD", "дин", "Serbian Dinar"),
    currency("UAH", "₴", "Ukrainian Hryvnia"),
    currency("RUB", "₽", "Russian Ruble"),
    currency("TRY", "₺", "Turkish Lira"),
    currency("ILS", "₪", "Israeli Shekel"),
    currency("AED", "د.إ", "UAE Dirham"),
    currency("SAR", "﷼", "Saudi Riyal"),
    currency("QAR", "QR", "Qatari Riyal"),
    currency("EGP", "E£", "Egyptian Pound"),
    currency("ZAR", "R", "South African Rand"),
    currency("NGN", "₦", "Nigerian Naira"),
    currency("KES", "KSh", "Kenyan Shilling"),
    currency("MAD", "DH", "Moroccan Dirham"),
    currency("KRW", "₩", "South Korean Won"),
    currency("TWD", "NT$", "New Taiwan Dollar"),
    currency("THB", "฿", "Thai Baht"),
    currency("VND", "₫", "Vietnamese Dong"),
    currency("IDR", "Rp", "Indonesian Rupiah"),
    currency("MYR", "RM", "Malaysian Ringgit"),
    currency("PHP", "₱", "Philippine Peso"),
    currency("PKR", "₨", "Pakistani Rupee"),
    currency("BDT", "৳", "Bangladeshi Taka"),
    currency("ARS", "AR$", "Argentine Peso"),
    currency("CLP", "CLP$", "Chilean Peso"),
    currency("COP", "COL$", "Colombian Peso"),
    currency("PEN", "S/", "Peruvian Sol"),
];

/// Symbols written before the amount; every other symbol follows it.
const PREFIX_SYMBOLS: &[&str] = &[
    "$", "€", "£", "¥", "₹", "₩", "₱", "₪", "₫", "₦", "₺", "C$", "A$", "NZ$", "HK$", "S$", "R$",
    "MX$", "NT$", "AR$",
];

/// Returns the full currency table.
pub fn currencies() -> &'static [Currency] {
    CURRENCIES
}

/// Looks up a currency by code, ignoring case.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

impl Currency {
    /// Whether the symbol is written before the amount.
    pub fn is_prefix(&self) -> bool {
        PREFIX_SYMBOLS.contains(&self.symbol)
    }

    /// Formats an amount in this currency.
    pub fn format(&self, amount: f64) -> String {
        if self.is_prefix() {
            format!("{}{:.2}", self.symbol, amount)
        } else {
            format!("{:.2} {}", amount, self.symbol)
        }
    }
}

/// Formats an amount for display with its currency symbol.
///
/// Amounts always carry two decimals, even for currencies without minor
/// units. Unknown codes render as `"<amount> <code>"`.
pub fn format_price(amount: f64, currency_code: &str) -> String {
    match find_currency(currency_code) {
        Some(currency) => currency.format(amount),
        None => format!("{:.2} {}", amount, currency_code),
    }
}
