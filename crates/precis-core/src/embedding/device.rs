use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Picks the compute device for the sentence encoder.
///
/// GPU backends are only tried when compiled in (`metal`, `cuda`) and `force_cpu` is off.
/// Any GPU failure falls back to CPU; the encoder is small enough to serve from CPU.
pub fn select_device(force_cpu: bool) -> Result<Device, EmbeddingError> {
    if force_cpu {
        debug!("CPU device forced by configuration");
        return Ok(Device::Cpu);
    }

    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Sentence encoder using Metal");
            return Ok(device);
        }
        Err(e) => failures.push(format!("metal: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Sentence encoder using CUDA");
            return Ok(device);
        }
        Err(e) => failures.push(format!("cuda: {e}")),
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!(reason = %failures.join("; "), "GPU unavailable, falling back to CPU");
    } else {
        failures.push("no GPU backend compiled".to_string());
        debug!(reason = %failures.join("; "), "Using CPU device");
    }

    Ok(Device::Cpu)
}
