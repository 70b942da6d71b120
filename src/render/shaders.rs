//! GLSL ES 3.0 sources

/// Point sprites with size attenuation
///
/// Attribute layout matches `particles::Particle::write`.
pub const POINT_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in float a_size;
layout(location = 2) in float a_alpha;
layout(location = 3) in vec3 a_color;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_point_scale;

out float v_alpha;
out vec3 v_color;

void main() {
    v_alpha = a_alpha;
    v_color = a_color;

    vec4 view_pos = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_projection * view_pos;
    gl_PointSize = max(a_size * u_point_scale / -view_pos.z, 1.0);
}
"#;

/// Round point with a soft edge
pub const POINT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in float v_alpha;
in vec3 v_color;

uniform float u_opacity;

out vec4 fragColor;

void main() {
    float dist = length(gl_PointCoord - vec2(0.5));
    if (dist > 0.5) {
        discard;
    }

    float edge = 1.0 - smoothstep(0.3, 0.5, dist);
    fragColor = vec4(v_color, v_alpha * edge * u_opacity);
}
"#;
