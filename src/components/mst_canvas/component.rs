use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::CanvasState;
use super::types::{EdgeInput, parse_vertex_count};
use crate::graph::GraphError;

type SharedState = Rc<RefCell<Option<CanvasState>>>;

fn notify(err: &GraphError) {
	warn!("{err}");
	let message = match err {
		GraphError::InvalidArgument { reason } => reason.clone(),
		GraphError::OutOfRange { .. } => "Please enter valid vertex indices.".to_string(),
		GraphError::EmptyStack => "No more actions to undo.".to_string(),
		other => other.to_string(),
	};
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&message);
	}
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

#[component]
pub fn MstCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	let vertex_count = RwSignal::new(String::new());
	let edge_from = RwSignal::new(String::new());
	let edge_to = RwSignal::new(String::new());
	let edge_weight = RwSignal::new(String::new());
	let total = RwSignal::new(String::from("-"));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("2d canvas context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(CanvasState::new(w, h));
		info!("canvas ready at {w}x{h}");

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.needs_redraw {
					render::render(s, &ctx);
					s.needs_redraw = false;
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_gen = state.clone();
	let on_generate = move |_: MouseEvent| {
		let result = parse_vertex_count(&vertex_count.get()).and_then(|n| {
			state_gen
				.borrow_mut()
				.as_mut()
				.map_or(Ok(()), |s| s.generate(n))
		});
		match result {
			Ok(()) => total.set("-".into()),
			Err(e) => notify(&e),
		}
	};

	let state_edge = state.clone();
	let on_add_edge = move |_: MouseEvent| {
		let input = EdgeInput {
			from: edge_from.get(),
			to: edge_to.get(),
			weight: edge_weight.get(),
		};
		let result = input.parse().and_then(|e| {
			state_edge
				.borrow_mut()
				.as_mut()
				.map_or(Ok(()), |s| s.add_edge(e.from, e.to, e.weight))
		});
		match result {
			Ok(()) => total.set("-".into()),
			Err(e) => notify(&e),
		}
	};

	let state_mst = state.clone();
	let on_mst = move |_: MouseEvent| {
		let result = state_mst
			.borrow_mut()
			.as_mut()
			.map(CanvasState::compute_mst);
		match result {
			Some(Ok(sum)) => total.set(format!("{sum:.2}")),
			Some(Err(e)) => notify(&e),
			None => {}
		}
	};

	let state_undo = state.clone();
	let on_undo = move |_: MouseEvent| {
		let result = state_undo.borrow_mut().as_mut().map(CanvasState::undo);
		match result {
			Some(Ok(())) => total.set("-".into()),
			Some(Err(e)) => notify(&e),
			None => {}
		}
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.is_some() {
				s.drag_to(x, y);
				total.set("-".into());
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
			s.needs_redraw = true;
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.needs_redraw = true;
		}
	};

	view! {
		<div class="mst-controls">
			<label>
				"Vertices "
				<input type="number" min="1" bind:value=vertex_count />
			</label>
			<button on:click=on_generate>"Generate"</button>

			<label>"From " <input type="number" min="1" bind:value=edge_from /></label>
			<label>"To " <input type="number" min="1" bind:value=edge_to /></label>
			<label>
				"Weight (m) "
				<input type="number" min="0" step="any" bind:value=edge_weight />
			</label>
			<button on:click=on_add_edge>"Add edge"</button>

			<button on:click=on_mst>"Compute MST"</button>
			<button on:click=on_undo>"Undo"</button>
			<span class="mst-total">"MST distance: " {move || total.get()} " m"</span>
		</div>
		<canvas
			node_ref=canvas_ref
			class="mst-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}
