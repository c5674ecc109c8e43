#[cfg(test)]
mod integration {
    use line_sdk::{
        auth::PostRevokeTokenRequest, core::LineSdkError, transport::TransportReqwest, LineSdkClient,
        LineSdkClientBuilder,
    };
    use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REVOKE_FORM: &str = "client_id=1234&access_token=tok-abc";

    fn client(server: &MockServer) -> LineSdkClient {
        let mut transport = TransportReqwest::new();
        transport.set_hostname(server.uri());

        LineSdkClientBuilder::with_transport(transport)
            .with_channel_id("1234")
            .build()
            .unwrap()
    }

    /// Revoke succeeds when server replies with empty body.
    #[tokio::test]
    async fn should_revoke_token_with_empty_response() -> Result<(), Box<dyn std::error::Error>> {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/revoke"))
            .and(body_string(REVOKE_FORM))
            .and(header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=utf-8",
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).revoke_access_token("tok-abc").await?;

        Ok(())
    }

    /// Revoke succeeds when server replies with empty JSON object.
    #[tokio::test]
    async fn should_revoke_token_with_object_response() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/revoke"))
            .and(body_string(REVOKE_FORM))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .send(PostRevokeTokenRequest::new("1234", "tok-abc"))
            .await?;

        Ok(())
    }

    /// Revoke never sends current access token.
    #[tokio::test]
    async fn should_revoke_token_without_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/revoke"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/revoke"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client(&server);
        client.set_token("current-token");

        assert!(client.revoke_access_token("tok-abc").await.is_ok());
    }

    /// Revoke failure is reported with server provided details.
    #[tokio::test]
    async fn should_not_revoke_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/v2.1/revoke"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"error":"invalid_request","error_description":"access token expired"}"#,
            ))
            .mount(&server)
            .await;

        let result = client(&server).revoke_access_token("tok-abc").await;

        match result {
            Err(LineSdkError::API {
                status,
                error,
                message,
            }) => {
                assert_eq!(status, 400);
                assert_eq!(error.as_deref(), Some("invalid_request"));
                assert_eq!(message, "access token expired");
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    /// Verify token sends token in query.
    #[tokio::test]
    async fn should_verify_token() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2/v2.1/verify"))
            .and(query_param("access_token", "tok-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"scope":"profile openid","client_id":"1234","expires_in":2591659}"#,
            ))
            .mount(&server)
            .await;

        let result = client(&server).verify_access_token("tok-abc").await?;

        assert_eq!(result.client_id, "1234");
        assert_eq!(result.expires_in, 2591659);
        assert_eq!(result.permissions(), vec!["profile", "openid"]);
        Ok(())
    }

    /// Profile request is authenticated with current access token.
    #[tokio::test]
    async fn should_fetch_profile() -> Result<(), Box<dyn std::error::Error>> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/profile"))
            .and(header("Authorization", "Bearer tok-abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"userId":"U1234","displayName":"Brown"}"#),
            )
            .mount(&server)
            .await;

        let client = client(&server);
        client.set_token("tok-abc");
        let profile = client.profile().await?;

        assert_eq!(profile.user_id, "U1234");
        assert_eq!(profile.display_name, "Brown");
        assert_eq!(profile.picture_url, None);
        Ok(())
    }
}
