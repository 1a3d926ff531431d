use super::*;

#[derive(Debug, thiserror::Error)]
#[error("course list missing")]
struct MissingCourses;

#[test]
fn from_error_keeps_display_text() {
    let fault = Fault::from_error(&MissingCourses);
    assert_eq!(fault.message(), "course list missing");
    assert_eq!(fault.to_string(), "course list missing");
}

#[test]
fn from_panic_reads_str_and_string_payloads() {
    let payload: Box<dyn Any + Send> = Box::new("static boom");
    assert_eq!(Fault::from_panic(payload.as_ref()).message(), "static boom");
    let payload: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
    assert_eq!(Fault::from_panic(payload.as_ref()).message(), "owned boom");
    let payload: Box<dyn Any + Send> = Box::new(7_u8);
    assert_eq!(Fault::from_panic(payload.as_ref()).message(), "render panicked");
}

#[test]
fn component_records_frames_innermost_first() {
    let result: RenderResult<()> = component("AcademyPage", || {
        component("CourseCard", || Err(Fault::new("bad course")))
    });
    let fault = result.expect_err("fault escapes");
    assert_eq!(fault.components(), ["CourseCard", "AcademyPage"]);
    assert_eq!(fault.component_stack(), "    in CourseCard\n    in AcademyPage");
}

#[test]
fn component_converts_panics_into_faults() {
    let result: RenderResult<()> = component("ShopPage", || panic!("no products"));
    let fault = result.expect_err("panic becomes fault");
    assert_eq!(fault.message(), "no products");
    assert_eq!(fault.components(), ["ShopPage"]);
}

#[test]
fn component_passes_successful_output_through() {
    let result = component("Footer", || Ok::<_, Fault>("footer"));
    assert_eq!(result, Ok("footer"));
}
