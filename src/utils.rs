pub fn shorten_id(id: &str) -> String {
    // cut on char boundaries, the input may be arbitrary user text
    if id.chars().count() > 12 {
        // 7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU -> 7xKX...gAsU
        let head_end = id.char_indices().nth(4).map_or(id.len(), |(i, _)| i);
        let tail_start = id.char_indices().rev().nth(3).map_or(0, |(i, _)| i);
        format!("{}...{}", &id[..head_end], &id[tail_start..])
    } else {
        id.to_string()
    }
}

/// Scales a raw on-chain amount by `10^decimals` without going through floats,
/// trimming trailing zeros of the fractional part.
pub fn format_token_amount(raw_amount: u64, decimals: u8) -> String {
    if decimals == 0 {
        return raw_amount.to_string();
    }

    let digits = raw_amount.to_string();
    let decimals = decimals as usize;
    let (whole, fraction) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    }
}
