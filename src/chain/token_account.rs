use crate::chain::pubkey::Pubkey;
use crate::constants::{
    PUBKEY_LEN, TOKEN_ACCOUNT_MIN_LEN, TOKEN_AMOUNT_OFFSET, TOKEN_DECIMALS_OFFSET,
    TOKEN_MINT_OFFSET,
};
use crate::error::LayoutError;

/// The three fields read out of a raw token account buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountData {
    pub mint: Pubkey,
    pub decimals: u8,
    pub amount: u64,
}

/// Reads mint (0..32), decimals (44) and the little-endian amount (64..72).
///
/// The length is checked up front so a layout change is reported instead of
/// producing a wrong balance.
pub fn decode_token_account(
    address: &Pubkey,
    data: &[u8],
) -> Result<TokenAccountData, LayoutError> {
    if data.len() < TOKEN_ACCOUNT_MIN_LEN {
        return Err(LayoutError::TooShort {
            account: address.to_string(),
            actual: data.len(),
            expected: TOKEN_ACCOUNT_MIN_LEN,
        });
    }

    let mut mint = [0u8; PUBKEY_LEN];
    mint.copy_from_slice(&data[TOKEN_MINT_OFFSET..TOKEN_MINT_OFFSET + PUBKEY_LEN]);

    let mut amount = [0u8; 8];
    amount.copy_from_slice(&data[TOKEN_AMOUNT_OFFSET..TOKEN_AMOUNT_OFFSET + 8]);

    Ok(TokenAccountData {
        mint: Pubkey::new_from_array(mint),
        decimals: data[TOKEN_DECIMALS_OFFSET],
        amount: u64::from_le_bytes(amount),
    })
}

#[cfg(test)]
pub(crate) fn encode_token_account(mint: &Pubkey, decimals: u8, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; 165];
    data[TOKEN_MINT_OFFSET..TOKEN_MINT_OFFSET + PUBKEY_LEN].copy_from_slice(mint.as_bytes());
    data[TOKEN_DECIMALS_OFFSET] = decimals;
    data[TOKEN_AMOUNT_OFFSET..TOKEN_AMOUNT_OFFSET + 8].copy_from_slice(&amount.to_le_bytes());
    data
}
