// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! User-facing message tables.

use crate::config::Language;

/// CLI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub files_passed: &'static str,
    pub files_failed: &'static str,
    pub message_passed: &'static str,
    pub message_failed: &'static str,
    pub no_staged_files: &'static str,
    pub common_path: &'static str,
    pub prefix: &'static str,
    pub stats_header: &'static str,
    pub total_files: &'static str,
    pub checked_files: &'static str,
    pub ignored_files: &'static str,
    pub unique_folders: &'static str,
    pub split_hint: &'static str,
    pub bypass_hint: &'static str,
}

const EN: Messages = Messages {
    files_passed: "Staged files passed the commit policy",
    files_failed: "Staged files violate the commit policy",
    message_passed: "Commit message passed the commit policy",
    message_failed: "Commit message violates the commit policy",
    no_staged_files: "No staged files to check",
    common_path: "Common path",
    prefix: "Prefix",
    stats_header: "Statistics",
    total_files: "total files",
    checked_files: "checked files",
    ignored_files: "ignored files",
    unique_folders: "unique folders",
    split_hint: "Split the change into one commit per folder, or add ignore_paths for shared files",
    bypass_hint: "To skip the check once, commit with --no-verify",
};

const KO: Messages = Messages {
    files_passed: "스테이징된 파일이 커밋 정책을 통과했습니다",
    files_failed: "스테이징된 파일이 커밋 정책을 위반했습니다",
    message_passed: "커밋 메시지가 커밋 정책을 통과했습니다",
    message_failed: "커밋 메시지가 커밋 정책을 위반했습니다",
    no_staged_files: "검사할 스테이징된 파일이 없습니다",
    common_path: "공통 경로",
    prefix: "접두사",
    stats_header: "통계",
    total_files: "전체 파일",
    checked_files: "검사한 파일",
    ignored_files: "무시된 파일",
    unique_folders: "고유 폴더",
    split_hint: "폴더별로 커밋을 나누거나 공유 파일을 ignore_paths에 추가하세요",
    bypass_hint: "한 번만 검사를 건너뛰려면 --no-verify 옵션으로 커밋하세요",
};

impl Messages {
    /// Message table for a language.
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Ko => &KO,
        }
    }
}
