use serde_json::json;

use crate::SaveModel;

impl testutils::DefaultForTest for SaveModel {
    /// One save of each type, the last of them inactive.
    fn default_for_test() -> Self {
        SaveModel::create(&json!([
            {"type": "disk", "path": "out/blurred"},
            {"type": "web", "path": "https://example.com/upload"},
            {"type": "local", "path": "out/debug", "is_active": false},
        ]))
        .expect("expected valid test saves")
    }
}
