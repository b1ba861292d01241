//! # feedrelay ドメイン層
//!
//! 上流 API とやり取りするデータ型と、失敗を値として運ぶためのエラー型を定義する。
//!
//! ## 設計方針
//!
//! - **Result による失敗の伝播**: 失敗しうる操作はすべて [`AppResult`] を返す。
//!   例外（panic）で失敗を伝えることはしない
//! - **単一のエラー型**: 上流の非成功ステータスも呼び出し中の例外も
//!   [`ApplicationError`] に正規化し、呼び出し側はステータスコードだけで分岐する
//! - **純粋なデータ**: レコード型は振る舞いを持たない DTO
//!
//! ## 依存関係の方向
//!
//! ```text
//! bff → infra → domain
//!   └────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - `ApplicationError` と Result 型エイリアス
//! - [`method`] - 上流呼び出しの HTTP メソッド
//! - [`post`] - 投稿レコード
//! - [`todo`] - Todo レコード
//!
//! ## 使用例
//!
//! ```rust
//! use feedrelay_domain::{AppResult, ApplicationError, HttpMethod, TodoRecord};
//! use http::StatusCode;
//!
//! let failure: AppResult<TodoRecord> = Err(ApplicationError::unsuccessful_status(
//!     HttpMethod::Get,
//!     "todos/1",
//!     StatusCode::NOT_FOUND,
//! ));
//!
//! match failure {
//!     Ok(todo) => println!("{}", todo.title),
//!     Err(e) => assert_eq!(e.status_code(), StatusCode::NOT_FOUND),
//! }
//! ```

pub mod error;
pub mod method;
pub mod post;
pub mod todo;

pub use error::{AppResult, ApplicationError, UnitResult};
pub use method::HttpMethod;
pub use post::PostRecord;
pub use todo::TodoRecord;
