use leptos::*;

use gajanand_catalog::ImageRef;
use gajanand_contact::ContactDetails;

use crate::content::{footer, home};
use crate::frontend::app::use_config;
use crate::layout::{copyright_line, current_year};
use crate::routes::Route as NavRoute;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let details = ContactDetails::STANDARD;
    let logo = ImageRef::new("/logo.svg").resolve(&config.asset_root);

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <img src=logo alt=format!("{} Logo", config.site_name) class="brand-logo"/>
                    <h3>{config.site_name.clone()}</h3>
                    <p class="brand-tagline">{home::TAGLINE}</p>
                    <p>{footer::BLURB}</p>
                </div>

                <div>
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NavRoute::ALL
                            .into_iter()
                            .map(|route| view! { <li><a href=route.path()>{route.label()}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4>"Contact Info"</h4>
                    <ul>
                        <li><a href=details.mailto_href()>{details.email}</a></li>
                        <li>
                            <a href=details.tel_href().unwrap_or_default()>
                                {details.phones_display()}
                            </a>
                        </li>
                        <li>{details.region}</li>
                    </ul>
                </div>
            </div>

            <p class="copyright">{copyright_line(current_year(), &config.site_name)}</p>
        </footer>
    }
}
