//! Domain Services

use market::Price;

/// Name given to a user created on first request: prefix + last 4 chars of
/// the Steam id, or the whole id when shorter
pub fn default_user_name(prefix: &str, steam_id: &str) -> String {
    let chars: Vec<char> = steam_id.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}{}", prefix, tail)
}

/// A refreshed price at or below the target is a drop
pub fn is_price_drop(new_price: Price, target_price: Price) -> bool {
    new_price <= target_price
}

/// Whether a listing total may be paid for a track
pub fn within_budget(total: Price, target_price: Price) -> bool {
    total <= target_price
}
