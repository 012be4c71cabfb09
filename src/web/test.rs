use poem::test::TestClient;
use poem::Endpoint;

use crate::model::Regressor;
use crate::prelude::*;
use crate::web::create_app;

/// Coefficients of a toy model: `10,000 + 40,000·income + 1,000·age + 5,000·rooms − 2,000·bedrooms + 10·population`.
pub fn create_test_model() -> Regressor {
    Regressor {
        coefficients: vec![40000.0, 1000.0, 5000.0, -2000.0, 10.0],
        intercept: 10000.0,
    }
}

pub fn create_standalone_test_client() -> TestClient<impl Endpoint> {
    TestClient::new(create_app(Arc::new(create_test_model())))
}

pub async fn read_body(response: poem::test::TestResponse) -> Result<String> {
    response
        .0
        .into_body()
        .into_string()
        .await
        .map_err(|error| anyhow!("failed to read the body: {}", error))
}
