pub const VERTEX: &str = include_str!("gl_shaders/triangle.vert.glsl");
pub const FRAGMENT: &str = include_str!("gl_shaders/color.frag.glsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_target_glsl_330_core() {
        assert!(VERTEX.starts_with("#version 330 core"));
        assert!(FRAGMENT.starts_with("#version 330 core"));
    }

    #[test]
    fn vertex_inputs_match_attribute_slots() {
        assert!(VERTEX.contains("layout (location = 0) in vec3"));
        assert!(VERTEX.contains("layout (location = 1) in vec4"));
    }

    #[test]
    fn color_is_passed_through() {
        assert!(VERTEX.contains("out vec4 outCol;"));
        assert!(FRAGMENT.contains("in vec4 outCol;"));
        assert!(FRAGMENT.contains("FragColor = outCol;"));
    }
}
