//! Classification of objects created by a transaction.
//!
//! After publishing a collection, creating a marketplace, minting or listing,
//! the ids the next call needs are found among the transaction's created
//! objects by owner kind and Move type.

use souffl3_rpc::SuiApi;
use souffl3_types::{ObjectId, OwnedObjectRef, Owner, TransactionDigest};

use crate::error::WalletError;

const MINT_CAP_TYPE: &str = "mint_cap::MintCap";
const ALLOWLIST_TYPE: &str = "transfer_allowlist";
const COLLECTION_TYPE: &str = "collection::Collection";
const NFT_TYPE: &str = "nft::Nft";
const LISTING_TYPE: &str = "Market::Listing";
const OWNER_CAP_TYPE: &str = "safe::OwnerCap";
const SAFE_TYPE: &str = "safe::Safe";

/// Objects created by publishing an NFT collection package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedObjects {
    pub package_id: Option<ObjectId>,
    pub mint_cap: Option<ObjectId>,
    pub transfer_allowlist: Option<ObjectId>,
    pub collection: Option<ObjectId>,
}

/// Objects created by a `Market::list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingObjects {
    pub listing: Option<ObjectId>,
    pub owner_cap: Option<ObjectId>,
    pub safe: Option<ObjectId>,
}

async fn created<A: SuiApi + ?Sized>(
    api: &A,
    digest: &TransactionDigest,
) -> Result<Vec<OwnedObjectRef>, WalletError> {
    Ok(api.get_transaction(digest).await?.created)
}

/// Created objects of a publish transaction.
///
/// The immutable object is the package. Shared objects are classified by
/// type; when several match the same kind, the last one wins.
pub async fn published_objects<A: SuiApi + ?Sized>(
    api: &A,
    digest: &TransactionDigest,
) -> Result<PublishedObjects, WalletError> {
    let mut out = PublishedObjects::default();
    for obj in created(api, digest).await? {
        let id = obj.reference.object_id;
        match obj.owner {
            Owner::Immutable => out.package_id = Some(id),
            Owner::Shared { .. } => {
                let object_type = api.get_object(&id).await?.object_type;
                if object_type.contains(MINT_CAP_TYPE) {
                    out.mint_cap = Some(id);
                }
                if object_type.contains(ALLOWLIST_TYPE) {
                    out.transfer_allowlist = Some(id);
                }
                if object_type.contains(COLLECTION_TYPE) {
                    tracing::debug!(%id, %object_type, "found collection");
                    out.collection = Some(id);
                }
            }
            _ => {}
        }
    }
    Ok(out)
}

/// The marketplace created by `create_market`: the last created object.
pub async fn marketplace_object<A: SuiApi + ?Sized>(
    api: &A,
    digest: &TransactionDigest,
) -> Result<Option<ObjectId>, WalletError> {
    Ok(created(api, digest)
        .await?
        .last()
        .map(|obj| obj.reference.object_id))
}

/// The NFT created by a mint transaction.
pub async fn nft_object<A: SuiApi + ?Sized>(
    api: &A,
    digest: &TransactionDigest,
) -> Result<Option<ObjectId>, WalletError> {
    let mut nft = None;
    for obj in created(api, digest).await? {
        let id = obj.reference.object_id;
        if api.get_object(&id).await?.object_type.contains(NFT_TYPE) {
            nft = Some(id);
        }
    }
    Ok(nft)
}

/// Listing, safe and owner cap created by a `list` transaction.
pub async fn listing_objects<A: SuiApi + ?Sized>(
    api: &A,
    digest: &TransactionDigest,
) -> Result<ListingObjects, WalletError> {
    let mut out = ListingObjects::default();
    for obj in created(api, digest).await? {
        let id = obj.reference.object_id;
        let object_type = api.get_object(&id).await?.object_type;
        if object_type.contains(LISTING_TYPE) {
            out.listing = Some(id);
        }
        if object_type.contains(OWNER_CAP_TYPE) {
            out.owner_cap = Some(id);
        }
        if object_type.contains(SAFE_TYPE) {
            out.safe = Some(id);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use souffl3_nullables::NullSuiApi;
    use souffl3_rpc::RpcError;
    use souffl3_types::SuiAddress;

    const PKG: &str = "0xbcae3b5adb19abf3cc3e0c693bf976ef86a87479";

    fn id(n: u8) -> ObjectId {
        ObjectId::new([n; 20])
    }

    fn shared() -> Owner {
        Owner::Shared {
            initial_shared_version: Some(1),
        }
    }

    fn owned() -> Owner {
        Owner::AddressOwner(SuiAddress::new([0x80; 20]))
    }

    #[tokio::test]
    async fn classifies_publish_effects() {
        let api = NullSuiApi::new();
        let digest = TransactionDigest::new("328KStz3");
        api.add_object(id(2), format!("{PKG}::mint_cap::MintCap<{PKG}::suimarines::SUIMARINES>"), shared());
        api.add_object(id(3), "0x1::transfer_allowlist::Allowlist", shared());
        api.add_object(id(4), format!("{PKG}::collection::Collection<{PKG}::suimarines::SUIMARINES>"), shared());
        api.add_transaction(
            digest.clone(),
            vec![(id(1), Owner::Immutable), (id(2), shared()), (id(3), shared()), (id(4), shared()), (id(5), owned())],
        );

        let objs = published_objects(&api, &digest).await.unwrap();
        assert_eq!(
            objs,
            PublishedObjects {
                package_id: Some(id(1)),
                mint_cap: Some(id(2)),
                transfer_allowlist: Some(id(3)),
                collection: Some(id(4)),
            }
        );
    }

    #[tokio::test]
    async fn owned_objects_are_not_looked_up_for_publish() {
        let api = NullSuiApi::new();
        let digest = TransactionDigest::new("tx");
        // id(5) is not registered; looking it up would fail.
        api.add_transaction(digest.clone(), vec![(id(5), owned())]);
        assert_eq!(published_objects(&api, &digest).await.unwrap(), PublishedObjects::default());
    }

    #[tokio::test]
    async fn marketplace_is_last_created() {
        let api = NullSuiApi::new();
        let digest = TransactionDigest::new("AM8rD48r");
        api.add_transaction(digest.clone(), vec![(id(1), shared()), (id(2), shared())]);
        assert_eq!(marketplace_object(&api, &digest).await.unwrap(), Some(id(2)));

        let empty = TransactionDigest::new("empty");
        api.add_transaction(empty.clone(), vec![]);
        assert_eq!(marketplace_object(&api, &empty).await.unwrap(), None);
    }

    #[tokio::test]
    async fn finds_minted_nft() {
        let api = NullSuiApi::new();
        let digest = TransactionDigest::new("CnfJs8Tt");
        api.add_object(id(1), format!("{PKG}::nft::Nft<{PKG}::suimarines::SUIMARINES>"), owned());
        api.add_object(id(2), "0x2::coin::Coin<0x2::sui::SUI>", owned());
        api.add_transaction(digest.clone(), vec![(id(1), owned()), (id(2), owned())]);
        assert_eq!(nft_object(&api, &digest).await.unwrap(), Some(id(1)));
    }

    #[tokio::test]
    async fn classifies_listing_effects() {
        let api = NullSuiApi::new();
        let digest = TransactionDigest::new("HjFGATwR");
        api.add_object(id(1), "0xc3::Market::Listing<0x2::sui::SUI>", shared());
        api.add_object(id(2), "0x1::safe::OwnerCap", owned());
        api.add_object(id(3), "0x1::safe::Safe", shared());
        api.add_transaction(digest.clone(), vec![(id(1), shared()), (id(2), owned()), (id(3), shared())]);

        let objs = listing_objects(&api, &digest).await.unwrap();
        assert_eq!(objs.listing, Some(id(1)));
        assert_eq!(objs.owner_cap, Some(id(2)));
        assert_eq!(objs.safe, Some(id(3)));
    }

    #[tokio::test]
    async fn unknown_transaction_is_an_error() {
        let api = NullSuiApi::new();
        let err = listing_objects(&api, &TransactionDigest::new("nope")).await.unwrap_err();
        assert!(matches!(err, WalletError::Rpc(RpcError::TransactionNotFound(_))));
    }
}
