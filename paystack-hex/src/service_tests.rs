//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use paystack_types::{
        AppError, CallbackQuery, CurrencyCode, GatewayResult, InitializeTransaction, PayRequest,
        PaymentGateway,
    };

    use crate::{PaymentService, PaymentSettings};

    /// Records every call and answers with canned results.
    pub struct MockGateway {
        credentials: bool,
        pub initialized: Mutex<Vec<InitializeTransaction>>,
        pub verified: Mutex<Vec<String>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self {
                credentials: true,
                initialized: Mutex::new(Vec::new()),
                verified: Mutex::new(Vec::new()),
            }
        }

        pub fn without_credentials() -> Self {
            Self {
                credentials: false,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        fn has_credentials(&self) -> bool {
            self.credentials
        }

        async fn initialize(&self, req: InitializeTransaction) -> GatewayResult {
            if !self.credentials {
                return GatewayResult::missing_api_key();
            }
            self.initialized.lock().unwrap().push(req);
            GatewayResult::success("Authorization URL created", Some(json!({"reference": "r1"})))
        }

        async fn verify(&self, reference: &str) -> GatewayResult {
            if !self.credentials {
                return GatewayResult::missing_api_key();
            }
            self.verified.lock().unwrap().push(reference.to_string());
            GatewayResult::success("Verification successful", Some(json!({"status": "success"})))
        }
    }

    fn create_service() -> PaymentService<MockGateway> {
        PaymentService::new(MockGateway::new(), PaymentSettings::default())
    }

    fn pay_request(body: serde_json::Value) -> PayRequest {
        serde_json::from_value(body).unwrap()
    }

    fn bad_request_message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Validation Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_missing_email() {
        let service = create_service();
        let err = service
            .initiate(pay_request(json!({"amount": 10})))
            .await
            .unwrap_err();
        assert_eq!(bad_request_message(err), "email is required");
    }

    #[tokio::test]
    async fn test_blank_email() {
        let service = create_service();
        let err = service
            .initiate(pay_request(json!({"email": "   ", "amount": 10})))
            .await
            .unwrap_err();
        assert_eq!(bad_request_message(err), "email is required");
    }

    #[tokio::test]
    async fn test_missing_amount() {
        let service = create_service();
        let err = service
            .initiate(pay_request(json!({"email": "a@b.co"})))
            .await
            .unwrap_err();
        assert_eq!(bad_request_message(err), "amount is required");
    }

    #[tokio::test]
    async fn test_non_numeric_amount() {
        let service = create_service();
        let err = service
            .initiate(pay_request(json!({"email": "a@b.co", "amount": "lots"})))
            .await
            .unwrap_err();
        assert_eq!(bad_request_message(err), "amount must be a number");
    }

    #[tokio::test]
    async fn test_zero_and_negative_amount() {
        let service = create_service();
        for amount in [json!(0), json!(-5), json!("-0.01")] {
            let err = service
                .initiate(pay_request(json!({"email": "a@b.co", "amount": amount})))
                .await
                .unwrap_err();
            assert_eq!(bad_request_message(err), "amount must be > 0");
        }
        assert!(service.gateway().initialized.lock().unwrap().is_empty());
    }

    #[test]
    fn test_email_checked_before_amount() {
        let service = create_service();
        let err = service
            .prepare(pay_request(json!({"amount": "nope"})))
            .unwrap_err();
        assert_eq!(err.to_string(), "email is required");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Request Shaping Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_prepare_defaults_currency() {
        let service = create_service();
        let tx = service
            .prepare(pay_request(json!({"email": " a@b.co ", "amount": "10.50"})))
            .unwrap();

        assert_eq!(tx.email, "a@b.co");
        assert_eq!(tx.amount.value(), dec!(10.50));
        assert_eq!(tx.amount.to_minor_units(), 1050);
        assert_eq!(tx.currency.as_str(), "NGN");
        assert_eq!(tx.callback_url, None);
    }

    #[test]
    fn test_prepare_uses_configured_default_currency() {
        let settings = PaymentSettings {
            default_currency: CurrencyCode::new("GHS").unwrap(),
            public_base_url: None,
        };
        let service = PaymentService::new(MockGateway::new(), settings);
        let tx = service
            .prepare(pay_request(json!({"email": "a@b.co", "amount": 1, "currency": ""})))
            .unwrap();
        assert_eq!(tx.currency.as_str(), "GHS");
    }

    #[test]
    fn test_prepare_uppercases_currency() {
        let service = create_service();
        let tx = service
            .prepare(pay_request(json!({"email": "a@b.co", "amount": 1, "currency": " usd "})))
            .unwrap();
        assert_eq!(tx.currency.as_str(), "USD");
    }

    #[test]
    fn test_prepare_derives_callback_url() {
        let settings = PaymentSettings {
            public_base_url: Some("https://pay.example.com/".into()),
            ..PaymentSettings::default()
        };
        let service = PaymentService::new(MockGateway::new(), settings);
        let tx = service
            .prepare(pay_request(json!({"email": "a@b.co", "amount": 1})))
            .unwrap();
        assert_eq!(
            tx.callback_url.as_deref(),
            Some("https://pay.example.com/callback")
        );
    }

    #[test]
    fn test_prepare_explicit_callback_wins() {
        let settings = PaymentSettings {
            public_base_url: Some("https://pay.example.com".into()),
            ..PaymentSettings::default()
        };
        let service = PaymentService::new(MockGateway::new(), settings);
        let tx = service
            .prepare(pay_request(json!({
                "email": "a@b.co",
                "amount": 1,
                "callback_url": "https://shop.example.com/done"
            })))
            .unwrap();
        assert_eq!(
            tx.callback_url.as_deref(),
            Some("https://shop.example.com/done")
        );
    }

    #[tokio::test]
    async fn test_initiate_forwards_to_gateway() {
        let service = create_service();
        let result = service
            .initiate(pay_request(json!({"email": "a@b.co", "amount": 10.005})))
            .await
            .unwrap();

        assert!(result.ok());
        let calls = service.gateway().initialized.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].amount.to_minor_units(), 1001);
    }

    #[tokio::test]
    async fn test_initiate_without_credentials_returns_401_result() {
        let service = PaymentService::new(MockGateway::without_credentials(), PaymentSettings::default());
        let result = service
            .initiate(pay_request(json!({"email": "a@b.co", "amount": 5})))
            .await
            .unwrap();

        assert!(!result.ok());
        assert_eq!(result.status_code(), 401);
        assert!(!service.api_key_configured());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Verification Tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_verify_passes_reference() {
        let service = create_service();
        let result = service.verify("T123").await.unwrap();

        assert!(result.ok());
        assert_eq!(*service.gateway().verified.lock().unwrap(), vec!["T123"]);
    }

    #[tokio::test]
    async fn test_verify_empty_reference() {
        let service = create_service();
        let err = service.verify("").await.unwrap_err();
        assert_eq!(bad_request_message(err), "reference is required");
        assert!(service.gateway().verified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_forwards_reference_untrimmed() {
        let service = create_service();
        service.verify(" T123 ").await.unwrap();
        assert_eq!(*service.gateway().verified.lock().unwrap(), vec![" T123 "]);
    }

    #[tokio::test]
    async fn test_callback_uses_trxref() {
        let service = create_service();
        let query = CallbackQuery {
            reference: None,
            trxref: Some("ABC".into()),
        };
        service.handle_callback(&query).await.unwrap();

        assert_eq!(*service.gateway().verified.lock().unwrap(), vec!["ABC"]);
    }

    #[tokio::test]
    async fn test_callback_without_reference() {
        let service = create_service();
        let err = service
            .handle_callback(&CallbackQuery::default())
            .await
            .unwrap_err();
        assert_eq!(bad_request_message(err), "reference is required");
        assert!(service.gateway().verified.lock().unwrap().is_empty());
    }
}
