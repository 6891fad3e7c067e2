use serde_json::json;

use crate::ParameterModel;

impl testutils::DefaultForTest for ParameterModel {
    /// A small filter's parameters: one of each commonly used type, nested in two groups.
    fn default_for_test() -> Self {
        ParameterModel::create(&json!({
            "sigma": {
                "type": "float",
                "full_name": "Sigma",
                "description": "Standard deviation of the kernel.",
                "default": 1.0,
                "optional": true,
                "properties": {"maximum": 10.0},
            },
            "mode": {
                "type": "named_list",
                "default": "near",
                "properties": {
                    "options": {"near": "nearest", "wrap": "wrap-around"},
                    "option_descriptions": {"near": "Nearest pixel", "wrap": "Wrap around"},
                },
            },
            "advanced": {
                "type": "group",
                "children": {
                    "truncate": {"type": "int", "default": 4},
                    "invert": {"type": "bool", "default": false},
                },
            },
            "output": {
                "type": "folder",
                "children": {
                    "label": {"type": "string", "default": "blurred"},
                },
            },
        }))
        .expect("expected valid test parameters")
    }
}
