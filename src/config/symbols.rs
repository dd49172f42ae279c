/// The instruments offered in the symbol picker.
pub struct SymbolUniverse {
    pub available: &'static [&'static str],
    /// Selection used on first launch (no persisted state yet).
    pub default_selection: &'static [&'static str],
}

pub const SYMBOLS: SymbolUniverse = SymbolUniverse {
    available: &["BTC-USD", "ETH-USD", "SOL-USD", "EURUSD=X", "GC=F"],
    default_selection: &["BTC-USD", "EURUSD=X"],
};
