pub mod codec_contract;
