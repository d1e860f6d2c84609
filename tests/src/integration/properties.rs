//! # Core Properties
//!
//! Id uniqueness under concurrent proposals, signing determinism
//! across identity instances, and resolution stability.

#[cfg(test)]
mod tests {
    use crate::integration::DEV_KEY;
    use adapter_core::{
        keccak256, Bytes32, DealProposer, DealResolver, DealStore, Outcome, Predicate,
        PredicateOp, ProposeDealRequest, SigningIdentity,
    };
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn core() -> (Arc<DealProposer>, DealResolver) {
        let identity = Arc::new(SigningIdentity::from_hex(DEV_KEY).unwrap());
        let store = Arc::new(DealStore::new());
        (
            Arc::new(DealProposer::new(identity, Arc::clone(&store))),
            DealResolver::new(store),
        )
    }

    fn request(parameters_hex: &str) -> ProposeDealRequest {
        ProposeDealRequest {
            parameters_hex: parameters_hex.into(),
            outcomes: vec![Outcome {
                predicate: Predicate {
                    operator: PredicateOp::Equals,
                    amount: 9000,
                },
                tag: Bytes32([0x0d; 32]),
            }],
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_proposals_yield_distinct_sequential_ids() {
        let (proposer, _resolver) = core();

        let mut handles = Vec::new();
        for task in 0..10u64 {
            let proposer = Arc::clone(&proposer);
            handles.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for i in 0..20u64 {
                    let deal = proposer
                        .propose(request(&format!("0x{:016x}{:016x}", task, i)))
                        .unwrap();
                    ids.push(deal.id);
                }
                ids
            }));
        }

        let mut all_ids = BTreeSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(all_ids.insert(id), "id {id} allocated twice");
            }
        }
        let expected: BTreeSet<u64> = (0..200).collect();
        assert_eq!(all_ids, expected);
    }

    #[test]
    fn test_identical_parameters_hash_identically_across_deals() {
        let (proposer, _resolver) = core();
        let first = proposer.propose(request("0xdeadbeef")).unwrap();
        let second = proposer.propose(request("0xdeadbeef")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.parameters_hash, second.parameters_hash);
        // Deterministic signing: identical commitments, identical endorsements
        assert_eq!(first.signature, second.signature);
        assert_eq!(first.signature_parts, second.signature_parts);
    }

    #[test]
    fn test_two_identities_from_same_key_sign_identically() {
        let a = SigningIdentity::from_hex(DEV_KEY).unwrap();
        let b = SigningIdentity::from_hex(DEV_KEY).unwrap();
        let digest = keccak256(b"cross-instance determinism");
        assert_eq!(a.sign(&digest).unwrap(), b.sign(&digest).unwrap());
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_resolution_does_not_drift() {
        let (proposer, resolver) = core();
        let deal = proposer.propose(request("0xdeadbeef")).unwrap();

        let first = resolver.resolve(deal.id).unwrap();
        for _ in 0..25 {
            assert_eq!(resolver.resolve(deal.id).unwrap(), first);
        }
        assert_eq!(first.result, Bytes32([0x0d; 32]));
    }

    #[test]
    fn test_failed_proposal_leaves_no_trace() {
        let (proposer, resolver) = core();
        assert!(proposer.propose(request("0xnothex")).is_err());

        // The failed attempt must not have allocated id 0
        let deal = proposer.propose(request("0xdeadbeef")).unwrap();
        assert_eq!(deal.id, 0);
        assert!(resolver.resolve(1).is_err());
    }
}
