use crate::domain::encoder::encode;
use crate::domain::payment::{PaymentInput, PaymentRequest};
use crate::domain::ports::{QrRendererBox, RenderSize, RenderedCode};
use crate::domain::validator::Validator;
use crate::error::{QrError, Result};

/// The outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub request: PaymentRequest,
    pub payload: String,
    pub image: RenderedCode,
}

/// Entry point for turning form input into a scannable payment code.
///
/// `QrGenerator` validates the input, encodes the payload and hands it to the
/// renderer it owns. It keeps no state between calls, so one instance can
/// serve any number of concurrent requests.
pub struct QrGenerator {
    validator: Validator,
    renderer: QrRendererBox,
    size: RenderSize,
}

impl QrGenerator {
    /// Creates a new `QrGenerator` instance.
    ///
    /// # Arguments
    ///
    /// * `validator` - Field checks applied before encoding.
    /// * `renderer` - The collaborator that draws the code.
    pub fn new(validator: Validator, renderer: QrRendererBox) -> Self {
        Self {
            validator,
            renderer,
            size: RenderSize::default(),
        }
    }

    pub fn with_size(mut self, size: RenderSize) -> Self {
        self.size = size;
        self
    }

    /// Validates and encodes without rendering.
    pub fn payload(&self, input: &PaymentInput) -> Result<(PaymentRequest, String)> {
        let request = self.validator.validate_input(input).inspect_err(|errors| {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "payment input rejected");
        })?;
        let payload = encode(&request);
        Ok((request, payload))
    }

    /// Validates, encodes and renders.
    ///
    /// A renderer failure is reported as [`QrError::GeneralFailure`]; it is
    /// never retried.
    pub async fn generate(&self, input: &PaymentInput) -> Result<GeneratedCode> {
        let (request, payload) = self.payload(input)?;

        let image = self
            .renderer
            .render(&payload, self.size)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "QR rendering failed");
                QrError::GeneralFailure(e)
            })?;

        tracing::info!(iban = %request.iban(), amount = %request.amount(), "payment code generated");
        Ok(GeneratedCode {
            request,
            payload,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::infrastructure::in_memory::RecordingRenderer;

    fn input() -> PaymentInput {
        PaymentInput::new(
            "Juan Pérez",
            "ES91 2100 0418 4502 0005 1332",
            "100.00",
            "Factura #12345",
        )
    }

    #[tokio::test]
    async fn test_generate_hands_payload_to_renderer() {
        let renderer = RecordingRenderer::new();
        let generator = QrGenerator::new(Validator::default(), Box::new(renderer.clone()));

        let code = generator.generate(&input()).await.unwrap();

        assert_eq!(renderer.payloads().await, vec![code.payload.clone()]);
        assert_eq!(code.image.size, RenderSize::square(250));
        assert!(code.payload.contains("\nEUR100.00\n"));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_renderer() {
        let renderer = RecordingRenderer::new();
        let generator = QrGenerator::new(Validator::default(), Box::new(renderer.clone()));

        let bad = PaymentInput::new("", "1234", "100", "");
        match generator.generate(&bad).await {
            Err(QrError::Validation(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name, Field::Iban]);
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert!(renderer.payloads().await.is_empty());
    }

    #[tokio::test]
    async fn test_renderer_failure_is_general_failure() {
        let renderer = RecordingRenderer::failing("renderer offline");
        let generator = QrGenerator::new(Validator::default(), Box::new(renderer.clone()))
            .with_size(RenderSize::square(400));

        let err = generator.generate(&input()).await.unwrap_err();
        assert!(matches!(err, QrError::GeneralFailure(ref e) if e.0 == "renderer offline"));
        // Reported once, not retried.
        assert_eq!(renderer.payloads().await.len(), 1);
    }
}
