// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pretrained transformer encoders run through fastembed (ONNX runtime).

use fastembed::{
    EmbeddingModel, InitOptions, InitOptionsUserDefined, Pooling, TextEmbedding, TokenizerFiles,
    UserDefinedEmbeddingModel,
};
use serde::Serialize;
use std::path::Path;

use crate::encoder::provider::{Encoder, EncoderConfig, PoolingStrategy};
use crate::errors::ScoreError;

/// Short names accepted in place of full model codes.
const MODEL_ALIASES: &[(&str, EmbeddingModel)] = &[
    ("jina-code", EmbeddingModel::JinaEmbeddingsV2BaseCode),
    ("minilm", EmbeddingModel::AllMiniLML6V2),
    ("all-minilm-l6-v2", EmbeddingModel::AllMiniLML6V2),
    ("bge-small", EmbeddingModel::BGESmallENV15),
];

/// Files expected in a local model directory.
const ONNX_FILE: &str = "model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";
const CONFIG_FILE: &str = "config.json";
const SPECIAL_TOKENS_FILE: &str = "special_tokens_map.json";
const TOKENIZER_CONFIG_FILE: &str = "tokenizer_config.json";

/// A catalogue entry, as printed by `clonesim models`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelListing {
    /// fastembed variant name; unique even where codes repeat.
    pub name: String,
    pub code: String,
    pub dimension: usize,
    pub description: String,
}

/// Lists fastembed's built-in text embedding models.
pub fn list_models() -> Vec<ModelListing> {
    TextEmbedding::list_supported_models()
        .into_iter()
        .map(|info| ModelListing {
            name: format!("{:?}", info.model),
            code: info.model_code,
            dimension: info.dim,
            description: info.description,
        })
        .collect()
}

/// Resolves an alias, a variant name or a model code to a fastembed model.
///
/// All three are matched case-insensitively, variant names before codes. A
/// code shared by a plain and a quantized variant selects the first catalogue
/// entry carrying it.
fn resolve_builtin(code: &str) -> Result<(EmbeddingModel, String, usize), ScoreError> {
    let wanted = code.trim().to_lowercase();
    let mut catalogue = TextEmbedding::list_supported_models();

    let found = match MODEL_ALIASES.iter().find(|(alias, _)| *alias == wanted) {
        Some((_, model)) => catalogue.into_iter().find(|info| &info.model == model),
        None => {
            let by_name = catalogue
                .iter()
                .position(|info| format!("{:?}", info.model).to_lowercase() == wanted);
            let index = by_name.or_else(|| {
                catalogue
                    .iter()
                    .position(|info| info.model_code.to_lowercase() == wanted)
            });
            index.map(|i| catalogue.swap_remove(i))
        }
    };

    found
        .map(|info| (info.model, info.model_code, info.dim))
        .ok_or_else(|| {
            ScoreError::load(
                code,
                "unknown model code (run `clonesim models` for the supported list)",
            )
        })
}

impl From<PoolingStrategy> for Pooling {
    fn from(strategy: PoolingStrategy) -> Self {
        match strategy {
            PoolingStrategy::Cls => Pooling::Cls,
            PoolingStrategy::Mean => Pooling::Mean,
        }
    }
}

/// fastembed-backed encoder.
pub struct FastEmbedEncoder {
    embedder: TextEmbedding,
    model_id: String,
    dimension: Option<usize>,
}

impl FastEmbedEncoder {
    /// Loads a model from fastembed's catalogue, downloading it on first use.
    pub fn builtin(code: &str, config: &EncoderConfig) -> Result<Self, ScoreError> {
        let (model, model_id, dimension) = resolve_builtin(code)?;

        let mut init = InitOptions::new(model)
            .with_max_length(config.max_length)
            .with_show_download_progress(config.show_download_progress);
        if let Some(cache_dir) = &config.cache_dir {
            init = init.with_cache_dir(cache_dir.clone());
        }

        tracing::info!(model = %model_id, dimension, "loading fastembed model");
        let embedder = TextEmbedding::try_new(init)
            .map_err(|e| ScoreError::load(&model_id, format!("{:#}", e)))?;

        Ok(Self {
            embedder,
            model_id,
            dimension: Some(dimension),
        })
    }

    /// Loads an ONNX export (e.g. of `microsoft/codebert-base`) from a
    /// directory holding `model.onnx` and the Hugging Face tokenizer files.
    pub fn from_dir(dir: &Path, config: &EncoderConfig) -> Result<Self, ScoreError> {
        let model_id = format!("onnx:{}", dir.display());
        let read = |name: &str| -> Result<Vec<u8>, ScoreError> {
            let path = dir.join(name);
            std::fs::read(&path).map_err(|e| {
                ScoreError::load(&model_id, format!("failed to read {}: {}", path.display(), e))
            })
        };

        let tokenizer_files = TokenizerFiles {
            tokenizer_file: read(TOKENIZER_FILE)?,
            config_file: read(CONFIG_FILE)?,
            special_tokens_map_file: read(SPECIAL_TOKENS_FILE)?,
            tokenizer_config_file: read(TOKENIZER_CONFIG_FILE)?,
        };
        let model = UserDefinedEmbeddingModel::new(read(ONNX_FILE)?, tokenizer_files)
            .with_pooling(config.pooling.into());
        let options = InitOptionsUserDefined::new().with_max_length(config.max_length);

        tracing::info!(model = %model_id, pooling = %config.pooling, "loading local ONNX model");
        let embedder = TextEmbedding::try_new_from_user_defined(model, options)
            .map_err(|e| ScoreError::load(&model_id, format!("{:#}", e)))?;

        Ok(Self {
            embedder,
            model_id,
            dimension: None,
        })
    }
}

impl Encoder for FastEmbedEncoder {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn embed_texts(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoreError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.embedder
            .embed(texts, None)
            .map_err(|e| ScoreError::processing(&self.model_id, format!("{:#}", e)))
    }
}
