/**
 * User-facing Messages
 *
 * Every `message` string the API returns, in one place. The board's users
 * read Korean, so these are Korean; `UNAUTHENTICATED` keeps the wording
 * clients already match on.
 */

// Generic request errors
pub const BAD_REQUEST: &str = "잘못된 요청입니다.";
pub const UNAUTHENTICATED: &str = "Unauthenticated.";
pub const FORBIDDEN: &str = "권한이 없습니다.";
pub const SERVER_ERROR: &str = "서버 오류가 발생했습니다.";
pub const SERVICE_UNAVAILABLE: &str = "데이터베이스가 설정되지 않았습니다.";
pub const ROUTE_NOT_FOUND: &str = "Not Found";

// Posts
pub const POST_NOT_FOUND: &str = "존재하지 않는 게시글입니다.";
pub const POST_CREATED: &str = "게시글이 작성되었습니다.";
pub const POST_UPDATED: &str = "게시글이 수정되었습니다.";
pub const TITLE_REQUIRED: &str = "제목을 입력해주세요.";
pub const TITLE_TOO_LONG: &str = "제목은 최대 255자까지 입력 가능합니다.";
pub const POST_CONTENT_REQUIRED: &str = "내용을 입력해주세요.";

// Comments
pub const COMMENT_NOT_FOUND: &str = "존재하지 않는 댓글입니다.";
pub const COMMENT_CREATED: &str = "댓글이 작성되었습니다.";
pub const COMMENT_UPDATED: &str = "댓글이 수정되었습니다.";
pub const COMMENT_CONTENT_REQUIRED: &str = "댓글을 작성해주세요.";
pub const COMMENT_TOO_LONG: &str = "최대 255자까지 입력 가능합니다.";

pub const DELETED: &str = "삭제되었습니다.";

// Registration
pub const REGISTERED: &str = "회원가입에 성공했습니다.";
pub const NICKNAME_REQUIRED: &str = "닉네임을 입력해주세요.";
pub const NICKNAME_TOO_SHORT: &str = "닉네임은 최소 2자리여야 합니다.";
pub const NICKNAME_TOO_LONG: &str = "닉네임은 최대 16자리입니다.";
pub const EMAIL_REQUIRED: &str = "이메일을 입력해주세요.";
pub const EMAIL_MALFORMED: &str = "이메일 형식에 맞지 않습니다.";
pub const PASSWORD_REQUIRED: &str = "비밀번호를 입력해주세요.";
pub const PASSWORD_TOO_SHORT: &str = "비밀번호는 최소 6자리여야 합니다.";
pub const PASSWORD_TOO_LONG: &str = "비밀번호는 최대 16자리입니다.";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "비밀번호 확인을 입력해주세요.";
pub const CONFIRM_PASSWORD_MISMATCH: &str = "비밀번호와 비밀번호 확인이 일치하지 않습니다.";
pub const EMAIL_TAKEN: &str = "이미 존재하는 이메일입니다.";
pub const NICKNAME_TAKEN: &str = "이미 존재하는 닉네임입니다.";

// Availability checks word a few rules differently from registration
pub const CHECK_NICKNAME_TOO_SHORT: &str = "닉네임은 최소 2자리 이상이어야 합니다.";
pub const CHECK_NICKNAME_TOO_LONG: &str = "닉네임은 최대 16자리 이하여야 합니다.";
pub const CHECK_EMAIL_MALFORMED: &str = "이메일 형식이 적절하지 않습니다.";
pub const NICKNAME_AVAILABLE: &str = "사용 가능한 닉네임입니다.";
pub const EMAIL_AVAILABLE: &str = "사용 가능한 이메일입니다.";

// Sessions
pub const LOGIN_FAILED: &str = "로그인에 실패했습니다.";
pub const LOGGED_OUT: &str = "로그아웃 되었습니다.";

/// Body of responses that carry only a message
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
