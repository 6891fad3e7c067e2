use serde_json::json;

use crate::FilterTree;

impl testutils::DefaultForTest for FilterTree {
    /// An input followed by a group holding two filters, one of them inactive, and an inactive
    /// group.
    fn default_for_test() -> Self {
        FilterTree::from_value(&json!([
            {"type": "input", "name": "source", "fn": "load_image"},
            {
                "type": "folder",
                "name": "smoothing",
                "full_name": "Smoothing",
                "children": [
                    {
                        "type": "filter",
                        "name": "blur",
                        "description": "Gaussian blur.",
                        "fn": "gaussian_filter",
                        "params": {
                            "sigma": {"type": "float", "default": 1.0},
                        },
                        "save_info": [{"type": "disk", "path": "out/blurred"}],
                    },
                    {"type": "filter", "name": "median", "is_active": false},
                ],
            },
            {
                "type": "group",
                "name": "disabled",
                "is_active": false,
                "children": [{"type": "modifier", "name": "threshold"}],
            },
        ]))
        .expect("expected valid test tree")
    }
}
