/// Devnet
pub const RPC_URL: &str = "https://api.devnet.solana.com";
pub const NETWORK_NAME: &str = "devnet";

/// Programs
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
pub const TOKEN_METADATA_PROGRAM_ID: &str = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s";
pub const METADATA_SEED: &[u8] = b"metadata";
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

// Token account layout (consumed, never produced)
pub const TOKEN_MINT_OFFSET: usize = 0;
pub const TOKEN_DECIMALS_OFFSET: usize = 44;
pub const TOKEN_AMOUNT_OFFSET: usize = 64;
pub const TOKEN_ACCOUNT_MIN_LEN: usize = TOKEN_AMOUNT_OFFSET + 8;

// Metadata account key discriminator for MetadataV1
pub const METADATA_V1_KEY: u8 = 4;

// getMultipleAccounts accepts at most this many keys per call
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

pub const PUBKEY_LEN: usize = 32;

// UI
pub const INPUT_MAX_LEN: usize = 64;
pub const NFT_GRID_COLUMNS: usize = 3;
pub const NFT_CARD_HEIGHT: u16 = 5;
pub const EVENT_POLL_MILLIS: u64 = 50;

pub const DEFAULT_LOG_FILE: &str = "wallet-viewer.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const BANNER: &str = r#"
╦ ╦╔═╗╦  ╦  ╔═╗╔╦╗  ╦  ╦╦╔═╗╦ ╦╔═╗╦═╗
║║║╠═╣║  ║  ║╣  ║   ╚╗╔╝║║╣ ║║║║╣ ╠╦╝
╚╩╝╩ ╩╩═╝╩═╝╚═╝ ╩    ╚╝ ╩╚═╝╚╩╝╚═╝╩╚═
"#;
