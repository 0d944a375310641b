use serde::Deserialize;

// 名册增量修改请求：一批用户ID
//
// 增删都是幂等的集合操作：重复添加已在册的用户、移除不在册的
// 用户都是 no-op，不会报错。
#[derive(Debug, Clone, Deserialize)]
pub struct RosterChangeRequest {
    pub user_ids: Vec<i64>,
}
