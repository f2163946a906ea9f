//! 合并请求体到已有会员
//!
//! PUT 覆盖全部可变字段; PATCH 只覆盖请求中出现的字段。

use shared::models::{Member, MemberPatch, MemberReplace};

use crate::utils::{AppError, AppResult};

/// 整体覆盖 (id 保持不变)
pub fn apply_replace(member: &mut Member, data: MemberReplace) {
    member.full_name = data.full_name;
    member.email = data.email;
    member.phone_number = data.phone_number;
    member.date_of_birth = data.date_of_birth;
    member.status = data.status;
}

/// 部分更新
///
/// 显式 `null`: `phoneNumber` 清空, 其余必填字段返回 400。
/// 合并后的记录由调用方再做一次校验。
pub fn apply_patch(member: &mut Member, patch: MemberPatch) -> AppResult<()> {
    if let Some(full_name) = patch.full_name {
        member.full_name = full_name.ok_or_else(|| AppError::required("fullName"))?;
    }
    if let Some(email) = patch.email {
        member.email = email.ok_or_else(|| AppError::required("email"))?;
    }
    if let Some(phone_number) = patch.phone_number {
        member.phone_number = phone_number;
    }
    if let Some(date_of_birth) = patch.date_of_birth {
        member.date_of_birth = date_of_birth.ok_or_else(|| AppError::required("dateOfBirth"))?;
    }
    if let Some(status) = patch.status {
        member.status = status.ok_or_else(|| AppError::required("status"))?;
    }
    Ok(())
}
