#[cfg(test)]
mod tests {
    use crate::transactions::{
        InMemoryTransactionRepository, TransactionFilter, TransactionKind, TransactionService,
        TransactionServiceTrait,
    };
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn service() -> TransactionService {
        TransactionService::new(Arc::new(InMemoryTransactionRepository::seeded()))
    }

    fn search(text: &str) -> TransactionFilter {
        TransactionFilter {
            search: Some(text.to_string()),
            kind: None,
        }
    }

    #[test]
    fn test_search_all_newest_first() {
        let all = service().search(&TransactionFilter::default()).unwrap();
        let ids: Vec<&str> = all.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_asset_or_wallet() {
        let service = service();

        let by_asset = service.search(&search("bit")).unwrap();
        assert_eq!(by_asset.len(), 1);
        assert_eq!(by_asset[0].asset, "Bitcoin");

        let by_wallet = service.search(&search("METAMASK")).unwrap();
        assert_eq!(by_wallet.len(), 2);

        assert!(service.search(&search("solana")).unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_kind() {
        let filter = TransactionFilter {
            search: None,
            kind: Some(TransactionKind::Sell),
        };
        let sells = service().search(&filter).unwrap();
        assert_eq!(sells.len(), 1);
        assert_eq!(sells[0].asset, "Ethereum");

        let receives = TransactionFilter {
            search: None,
            kind: Some(TransactionKind::Receive),
        };
        assert!(service().search(&receives).unwrap().is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let summary = service().summary(&TransactionFilter::default()).unwrap();
        assert_eq!(summary.count, 3);
        // 6543.2 + 1725 + 425
        assert_eq!(summary.total_value, dec!(8693.2));
        assert_eq!(summary.total_fees, dec!(25.75));
    }

    #[test]
    fn test_export_csv() {
        let csv = service().export_csv(&search("metamask")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,Type,Asset,Amount,Price,Value,Fee,Wallet",
                "07/01/2025 10:30,buy,Bitcoin,0.1,65432,6543.2,15.25,MetaMask Principal",
                "05/01/2025 09:15,transfer,Cardano,500,0.85,425,2,MetaMask Principal",
            ]
        );
    }

    #[test]
    fn test_export_csv_empty_has_header() {
        let csv = service().export_csv(&search("nothing")).unwrap();
        assert_eq!(csv.trim_end(), "Date,Type,Asset,Amount,Price,Value,Fee,Wallet");
    }
}
