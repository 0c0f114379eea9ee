//! WebGL2 particle background behind the hero

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlCanvasElement, HtmlElement, MouseEvent, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlShader, WebGlUniformLocation,
};

use crate::core::config::PageConfig;
use crate::core::particles::{CameraRig, PointCloud, Rgb, RigSettings, Viewport};
use crate::ui::dom::{self, Listener};

pub const CONTAINER_ID: &str = "heroParticles";

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_color;
uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;
out vec3 v_color;
void main() {
    vec4 eye = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_projection * eye;
    // Perspective size attenuation
    gl_PointSize = max(1.0, u_size * u_scale / -eye.z);
    v_color = a_color;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec3 v_color;
uniform float u_opacity;
out vec4 o_color;
void main() {
    o_color = vec4(v_color, u_opacity);
}
"#;

fn compile_shader(gl: &GL, source: &str, kind: u32) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("could not create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(JsValue::from(gl.get_shader_info_log(&shader).unwrap_or_default()));
    }
    Ok(shader)
}

fn link_program(gl: &GL) -> Result<WebGlProgram, JsValue> {
    let vertex = compile_shader(gl, VERTEX_SHADER, GL::VERTEX_SHADER)?;
    let fragment = compile_shader(gl, FRAGMENT_SHADER, GL::FRAGMENT_SHADER)?;
    let program = gl.create_program().ok_or("could not create program")?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);
    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(JsValue::from(gl.get_program_info_log(&program).unwrap_or_default()));
    }
    Ok(program)
}

fn upload_attribute(gl: &GL, location: u32, data: &[f32]) -> Result<(), JsValue> {
    let buffer = gl.create_buffer().ok_or("could not create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = js_sys::Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
    Ok(())
}

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
}

struct Scene {
    gl: GL,
    canvas: HtmlCanvasElement,
    uniforms: Uniforms,
    count: i32,
    rig: CameraRig,
    aspect: f32,
    max_pixel_ratio: f64,
}

impl Scene {
    fn resize(&mut self) {
        let viewport = Viewport {
            width: dom::viewport_width(),
            height: dom::viewport_height(),
            device_pixel_ratio: dom::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0),
        };
        let (width, height) = viewport.buffer_size(self.max_pixel_ratio);
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.gl
            .uniform1f(self.uniforms.scale.as_ref(), height as f32 / 2.0);
        self.aspect = viewport.aspect();
    }

    fn draw(&mut self) {
        self.rig.step();

        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.model.as_ref(),
            false,
            &self.rig.model().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.view.as_ref(),
            false,
            &self.rig.view().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.projection.as_ref(),
            false,
            &self.rig.projection(self.aspect).to_cols_array(),
        );
        gl.draw_arrays(GL::POINTS, 0, self.count);
    }
}

/// Running particle background. The render loop stops on [`stop`](Self::stop).
pub struct ParticleRenderer {
    canvas: HtmlCanvasElement,
    running: Rc<Cell<bool>>,
    frame: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    listeners: Vec<Listener>,
}

impl ParticleRenderer {
    pub fn start(container: &HtmlElement, config: &PageConfig) -> Result<Self, JsValue> {
        let document = dom::document()?;
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.style().set_property("width", "100%")?;
        canvas.style().set_property("height", "100%")?;
        canvas.style().set_property("display", "block")?;

        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 context unavailable")?
            .dyn_into()?;
        let program = link_program(&gl)?;
        gl.use_program(Some(&program));

        let cloud = PointCloud::generate(
            config.particle_count,
            config.particle_extent,
            Rgb::from_hex(config.particle_color_from),
            Rgb::from_hex(config.particle_color_to),
            &mut rand::thread_rng(),
        );
        upload_attribute(&gl, 0, cloud.positions())?;
        upload_attribute(&gl, 1, cloud.colors())?;

        gl.uniform1f(gl.get_uniform_location(&program, "u_size").as_ref(), config.particle_size);
        gl.uniform1f(
            gl.get_uniform_location(&program, "u_opacity").as_ref(),
            config.particle_opacity,
        );
        let uniforms = Uniforms {
            model: gl.get_uniform_location(&program, "u_model"),
            view: gl.get_uniform_location(&program, "u_view"),
            projection: gl.get_uniform_location(&program, "u_projection"),
            scale: gl.get_uniform_location(&program, "u_scale"),
        };

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE);
        gl.disable(GL::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let rig = CameraRig::new(RigSettings {
            camera_distance: config.camera_distance,
            smoothing: config.camera_smoothing,
            pointer_influence: config.pointer_influence,
            rotation_step: glam::Vec2::new(config.rotation_step_x, config.rotation_step_y),
            ..RigSettings::default()
        });

        let scene = Rc::new(RefCell::new(Scene {
            gl,
            canvas: canvas.clone(),
            uniforms,
            count: i32::try_from(cloud.len()).map_err(|_| "too many particles")?,
            rig,
            aspect: 1.0,
            max_pixel_ratio: config.max_pixel_ratio,
        }));
        scene.borrow_mut().resize();
        container.append_child(&canvas)?;

        let mut listeners = Vec::new();
        let on_resize = scene.clone();
        listeners.push(Listener::on_window("resize", move |_| {
            on_resize.borrow_mut().resize();
        })?);
        let on_pointer = scene.clone();
        listeners.push(Listener::new(&document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_pointer.borrow_mut().rig.pointer_moved(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    dom::viewport_width(),
                    dom::viewport_height(),
                );
            }
        })?);

        let renderer = Self {
            canvas,
            running: Rc::new(Cell::new(true)),
            frame: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            listeners,
        };
        renderer.run(scene)?;
        Ok(renderer)
    }

    fn run(&self, scene: Rc<RefCell<Scene>>) -> Result<(), JsValue> {
        let window = dom::window()?;
        let running = self.running.clone();
        let frame = self.frame.clone();
        let next = self.tick.clone();

        *self.tick.borrow_mut() = Some(Closure::new(move || {
            if !running.get() {
                return;
            }
            scene.borrow_mut().draw();
            if let Some(tick) = next.borrow().as_ref() {
                frame.set(window.request_animation_frame(tick.as_ref().unchecked_ref()).ok());
            }
        }));

        if let Some(tick) = self.tick.borrow().as_ref() {
            self.frame
                .set(Some(dom::window()?.request_animation_frame(tick.as_ref().unchecked_ref())?));
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running.set(false);
        if let (Some(id), Ok(window)) = (self.frame.take(), dom::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        self.listeners.clear();
        self.canvas.remove();
    }
}
