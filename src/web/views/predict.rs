use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse};

use crate::evaluation::Evaluation;
use crate::model::{Features, Regressor};
use crate::prelude::*;
use crate::web::views::index::render_page;
use crate::web::views::predict::models::{EstimateTexts, Outcome, PredictForm};

pub mod models;

/// Estimates the price and renders it into the form page.
///
/// Any failure ends up as the error text on the same page, with `200 OK`.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(
    form: poem::Result<Form<PredictForm>>,
    Data(model): Data<&Arc<Regressor>>,
) -> Result<impl IntoResponse> {
    let outcome = match estimate(form, model) {
        Ok(texts) => Outcome::Estimate(texts),
        Err(error) => {
            info!("failed to estimate: {:#}", error);
            Outcome::from(error)
        }
    };
    Ok(Html(render_page(Some(&outcome)).into_string()))
}

fn estimate(form: poem::Result<Form<PredictForm>>, model: &Regressor) -> Result<EstimateTexts> {
    let Form(form) = form.map_err(|error| anyhow!("{}", error))?;
    let features = Features::try_from(form)?;
    if !features.to_array().iter().all(|value| value.is_finite()) {
        bail!("input contains NaN or infinity");
    }
    let prediction = model.predict(&features);
    if !prediction.is_finite() {
        bail!("the predicted price is out of range: {}", prediction);
    }
    let evaluation = Evaluation::fabricate(prediction, &mut rand::thread_rng());
    debug!(?features, prediction, evaluation.actual);
    Ok(EstimateTexts::new(prediction, &evaluation))
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;

    use crate::prelude::*;
    use crate::web::test::{create_standalone_test_client, read_body};

    const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

    async fn post_form(body: impl Into<String>) -> Result<String> {
        let response = create_standalone_test_client()
            .post("/predict")
            .content_type(FORM_CONTENT_TYPE)
            .body(body.into())
            .send()
            .await;
        response.assert_status_is_ok();
        response.assert_content_type("text/html; charset=utf-8");
        read_body(response).await
    }

    fn extract_text<'a>(body: &'a str, id: &str) -> Option<&'a str> {
        let start = format!(r#"id="{}">"#, id);
        let (_, rest) = body.split_once(&start)?;
        rest.split_once("</p>").map(|(text, _)| text)
    }

    fn extract_number(body: &str, id: &str, prefix: &str) -> f64 {
        let text = extract_text(body, id).unwrap();
        text.strip_prefix(prefix).unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn estimate_ok() -> Result {
        let body = post_form("income=5.0&age=30&rooms=6&bedrooms=3&population=1000").await?;
        assert_eq!(
            extract_text(&body, "prediction-text"),
            Some("💰 Estimated House Price: $274,000.00"),
        );
        assert_eq!(extract_text(&body, "r2-text"), Some("R² Score: 0.00"));

        let mse = extract_number(&body, "mse-text", "MSE: ");
        let rmse = extract_number(&body, "rmse-text", "RMSE: ");
        assert!(rmse <= 5000.0);
        assert!((rmse - mse.sqrt()).abs() < 0.01, "RMSE {} vs. MSE {}", rmse, mse);
        Ok(())
    }

    #[tokio::test]
    async fn missing_field_ok() -> Result {
        let body = post_form("income=5.0&age=30&rooms=6&bedrooms=3").await?;
        let text = extract_text(&body, "prediction-text").unwrap();
        assert_eq!(text, "Error: missing field `population`");
        assert!(extract_text(&body, "mse-text").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_field_ok() -> Result {
        let body = post_form("income=lots&age=30&rooms=6&bedrooms=3&population=1000").await?;
        let text = extract_text(&body, "prediction-text").unwrap();
        assert!(text.starts_with("Error: `income` is not a number"), "{}", text);
        Ok(())
    }

    #[tokio::test]
    async fn empty_body_ok() -> Result {
        let body = post_form("").await?;
        let text = extract_text(&body, "prediction-text").unwrap();
        assert!(text.starts_with("Error: "), "{}", text);
        Ok(())
    }

    #[tokio::test]
    async fn not_a_form_ok() -> Result {
        let response = create_standalone_test_client()
            .post("/predict")
            .content_type("application/json")
            .body(r#"{"income": 5.0}"#)
            .send()
            .await;
        response.assert_status_is_ok();
        let body = read_body(response).await?;
        let text = extract_text(&body, "prediction-text").unwrap();
        assert!(text.starts_with("Error: "), "{}", text);
        Ok(())
    }

    #[tokio::test]
    async fn non_finite_input_ok() -> Result {
        for income in ["nan", "inf", "-inf"] {
            let body =
                post_form(format!("income={}&age=30&rooms=6&bedrooms=3&population=1000", income))
                    .await?;
            let text = extract_text(&body, "prediction-text").unwrap();
            assert_eq!(text, "Error: input contains NaN or infinity", "{}", income);
            assert!(extract_text(&body, "mse-text").is_none());
        }
        Ok(())
    }

    #[tokio::test]
    async fn overflowing_prediction_ok() -> Result {
        let body = post_form("income=1e308&age=30&rooms=6&bedrooms=3&population=1000").await?;
        let text = extract_text(&body, "prediction-text").unwrap();
        assert!(text.starts_with("Error: the predicted price is out of range"), "{}", text);
        assert!(extract_text(&body, "mse-text").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn get_not_allowed_ok() {
        let response = create_standalone_test_client().get("/predict").send().await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
