use leptos::prelude::*;

use crate::components::mst_canvas::MstCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="mst-editor">
				<h1>"Minimum Spanning Tree"</h1>
				<p class="subtitle">
					"Generate vertices, connect them with distances in metres, drag to rearrange."
				</p>
				<MstCanvas width=Some(900.0) height=Some(600.0) />
			</div>
		</ErrorBoundary>
	}
}
