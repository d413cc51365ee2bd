// テスト用の設定モック実装

use super::traits::ProcessingConfig;

pub struct MockProcessingConfig {
    pub workers: usize,
    pub buffer_size: usize,
}

impl ProcessingConfig for MockProcessingConfig {
    fn worker_count(&self) -> usize {
        self.workers
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_config_trait() {
        let config = MockProcessingConfig {
            workers: 8,
            buffer_size: 100,
        };

        assert_eq!(config.worker_count(), 8);
        assert_eq!(config.channel_buffer_size(), 100);
        assert_eq!(config.chunk_size(20), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_chunk_size_is_clamped_via_trait_object() {
        let config = MockProcessingConfig {
            workers: 0,
            buffer_size: 50,
        };

        let config_ref: &dyn ProcessingConfig = &config;
        assert_eq!(config_ref.worker_count(), 0);
        // ワーカー数0でもチャンク計算はゼロ除算しない
        assert_eq!(config_ref.chunk_size(5), 5);
        assert!(config_ref.validate().is_err());
    }
}
