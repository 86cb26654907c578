/// A coin accepted by the machine, keyed by the key that inserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denomination {
    pub symbol: char,
    pub value: u32,
}

/// An item for sale, keyed by the key that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub symbol: char,
    pub price: u32,
    pub name: &'static str,
}

pub const DENOMINATIONS: [Denomination; 5] = [
    Denomination { symbol: '1', value: 5 },
    Denomination { symbol: '2', value: 10 },
    Denomination { symbol: '3', value: 25 },
    Denomination { symbol: '4', value: 100 },
    Denomination { symbol: '5', value: 200 },
];

pub const PRODUCTS: [Product; 5] = [
    Product { symbol: 'A', price: 50, name: "chocolate" },
    Product { symbol: 'B', price: 90, name: "juice" },
    Product { symbol: 'C', price: 200, name: "biscuit" },
    Product { symbol: 'D', price: 150, name: "shake" },
    Product { symbol: 'E', price: 120, name: "chips" },
];

/// Coins paid out as change, largest first.
pub const CHANGE_DENOMINATIONS: [u32; 5] = [200, 100, 25, 10, 5];

/// Value of the coin inserted by `symbol`, if it is a coin key.
pub fn coin_value(symbol: char) -> Option<u32> {
    DENOMINATIONS.iter().find(|d| d.symbol == symbol).map(|d| d.value)
}

/// Catalog entry selected by `symbol`, if it is a product key.
pub fn product(symbol: char) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.symbol == symbol)
}

/// The smallest coin the machine accepts. Any amount that is a multiple of it
/// can be paid back exactly with `CHANGE_DENOMINATIONS`.
pub fn smallest_denomination() -> u32 {
    DENOMINATIONS.iter().map(|d| d.value).min().unwrap_or(1)
}
