//! Fixed alert texts shown through the host's alert primitive.

/// A sized product was added without a size.
pub const CHOOSE_SIZE: &str = "Выберите объем!";

/// A hot/cold beverage was added without a temperature.
pub const CHOOSE_TEMPERATURE: &str = "Выберите температуру!";

/// Checkout without floor or office.
pub const ADDRESS_REQUIRED: &str = "Укажите этаж и офис!";

/// Checkout with nothing in the cart.
pub const CART_EMPTY: &str = "Корзина пуста";

/// Admin PIN accepted.
pub const ADMIN_ENABLED: &str = "Режим администратора включен";
