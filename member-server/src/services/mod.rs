//! 服务层 - 会员业务逻辑
//!
//! # 服务列表
//!
//! - [`MemberService`] - 会员增删改查 (存在性检查 + 仓储调用)

pub mod member;

pub use member::MemberService;
