mod client;
mod index;
mod offchain;
mod types;

pub use client::WalletClient;
pub use index::{metadata_address, AssetIndex, MetadataProgramIndex};
pub use offchain::{image_from_metadata, resolve_images, HttpMetadataFetcher, MetadataFetcher};
pub use types::{DigitalAsset, FungibleHolding, NonFungibleHolding, WalletHoldings};
