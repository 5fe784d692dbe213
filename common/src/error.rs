//! エラー型定義

use crate::types::BeerId;
use std::fmt;
use thiserror::Error;

/// 失敗したストア操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListBeers,
    GetBeer(BeerId),
    UpdateBeer(BeerId),
}

impl Operation {
    /// 対象ID（一覧取得はNone）
    pub fn beer_id(&self) -> Option<BeerId> {
        match self {
            Operation::ListBeers => None,
            Operation::GetBeer(id) | Operation::UpdateBeer(id) => Some(*id),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListBeers => write!(f, "Error fetching beers"),
            Operation::GetBeer(id) => write!(f, "Error fetching beer details for ID {}", id),
            Operation::UpdateBeer(id) => write!(f, "Error updating beer with ID {}", id),
        }
    }
}

/// リクエスト失敗の原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// 共通エラー型
///
/// ネットワーク障害・非2xx・不正なレスポンスはすべて「リクエスト失敗」として扱う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{operation}: {cause}")]
    RequestFailed { operation: Operation, cause: Cause },
}

impl Error {
    pub fn request_failed(operation: Operation, cause: Cause) -> Self {
        Error::RequestFailed { operation, cause }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Error::RequestFailed { operation, .. } => *operation,
        }
    }

    pub fn cause(&self) -> &Cause {
        match self {
            Error::RequestFailed { cause, .. } => cause,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
