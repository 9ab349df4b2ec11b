pub struct BuiltinSource {
    pub name: &'static str,
    pub description: &'static str,
    pub data: &'static str,
}

pub const BUILTIN_SOURCES: &[BuiltinSource] = &[
    BuiltinSource {
        name: "Teapot",
        description: "Pot body as four bicubic quadrants",
        data: include_str!("../../data/teapot.txt"),
    },
    BuiltinSource {
        name: "Spoon",
        description: "Shallow bowl and handle, two patches",
        data: include_str!("../../data/spoon.txt"),
    },
    BuiltinSource {
        name: "Teacup",
        description: "Flaring cup as four bicubic quadrants",
        data: include_str!("../../data/teacup.txt"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patchfile::parse_patches;

    #[test]
    fn builtin_data_parses_inside_the_viewing_cube() {
        for source in BUILTIN_SOURCES {
            let patches = parse_patches(source.data)
                .unwrap_or_else(|e| panic!("{}: {e}", source.name));
            assert!(!patches.is_empty(), "{} has no complete patch", source.name);

            for patch in &patches {
                for i in 0..patch.rows() {
                    for j in 0..patch.cols() {
                        let p = patch.point(i, j);
                        for c in [p.x, p.y, p.z] {
                            assert!(c.abs() <= 2.2, "{}: {c} outside cube", source.name);
                        }
                    }
                }
            }
        }
    }
}
