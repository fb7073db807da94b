/// Write-only access to the platform clipboard.
///
/// Copying is best-effort: implementations swallow (and log) failures, so
/// callers never observe an error.
pub trait Clipboard {
    fn copy(&self, text: &str);
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn copy(&self, text: &str) {
        (**self).copy(text)
    }
}

/// Locale-aware money formatting.
pub trait CurrencyFormatter {
    /// ISO 4217 code, e.g. "USD".
    fn currency_code(&self) -> &str;
    /// Symbol shown in front of the amount field, e.g. "$".
    fn currency_symbol(&self) -> &str;
    /// Full display string for a monetary value, e.g. "$1,234.50".
    fn format(&self, value: f64) -> String;
}

impl<F: CurrencyFormatter + ?Sized> CurrencyFormatter for Box<F> {
    fn currency_code(&self) -> &str {
        (**self).currency_code()
    }

    fn currency_symbol(&self) -> &str {
        (**self).currency_symbol()
    }

    fn format(&self, value: f64) -> String {
        (**self).format(value)
    }
}
