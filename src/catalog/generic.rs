use crate::eval::interpreter::RenderCx;
use crate::foundation::naming::{is_attr_name, kebab_case};
use crate::registry::{Registry, Renderer, SharedRenderer};
use crate::render::element::{Element, Widget};
use serde_json::Value;
use std::sync::Arc;

/// Widget-library primitives wrapped generically, with the tag each one projects to.
///
/// Names a curated renderer already owns (`Card`, `Button`, `Tabs`, ...) are listed too; the
/// generic pass skips them.
pub(crate) const PRIMITIVES: &[(&str, &str)] = &[
    ("Card", "div"),
    ("CardContent", "div"),
    ("CardDescription", "div"),
    ("CardFooter", "div"),
    ("CardHeader", "div"),
    ("CardTitle", "div"),
    ("AspectRatio", "div"),
    ("ResizableHandle", "div"),
    ("ResizablePanel", "div"),
    ("ResizablePanelGroup", "div"),
    ("Sidebar", "aside"),
    ("SidebarContent", "div"),
    ("SidebarFooter", "div"),
    ("SidebarHeader", "div"),
    ("SidebarProvider", "div"),
    ("SidebarTrigger", "button"),
    ("Button", "button"),
    ("Input", "input"),
    ("InputGroup", "div"),
    ("InputGroupAddon", "div"),
    ("InputGroupButton", "button"),
    ("InputGroupInput", "input"),
    ("Textarea", "textarea"),
    ("Label", "label"),
    ("Checkbox", "button"),
    ("RadioGroup", "div"),
    ("RadioGroupItem", "button"),
    ("Switch", "button"),
    ("Slider", "div"),
    ("Select", "div"),
    ("SelectContent", "div"),
    ("SelectItem", "div"),
    ("SelectTrigger", "button"),
    ("SelectValue", "span"),
    ("Badge", "span"),
    ("Avatar", "span"),
    ("AvatarFallback", "span"),
    ("AvatarImage", "img"),
    ("Separator", "div"),
    ("Skeleton", "div"),
    ("Alert", "div"),
    ("AlertDescription", "div"),
    ("AlertTitle", "div"),
    ("Progress", "div"),
    ("Breadcrumb", "nav"),
    ("BreadcrumbItem", "li"),
    ("BreadcrumbLink", "a"),
    ("BreadcrumbList", "ol"),
    ("BreadcrumbPage", "span"),
    ("BreadcrumbSeparator", "li"),
    ("Dialog", "div"),
    ("DialogContent", "div"),
    ("DialogDescription", "p"),
    ("DialogFooter", "div"),
    ("DialogHeader", "div"),
    ("DialogTitle", "h2"),
    ("DialogTrigger", "button"),
    ("DropdownMenu", "div"),
    ("DropdownMenuContent", "div"),
    ("DropdownMenuItem", "div"),
    ("DropdownMenuLabel", "div"),
    ("DropdownMenuSeparator", "div"),
    ("DropdownMenuTrigger", "button"),
    ("Tooltip", "div"),
    ("TooltipContent", "div"),
    ("TooltipProvider", "div"),
    ("TooltipTrigger", "button"),
    ("Tabs", "div"),
    ("TabsContent", "div"),
    ("TabsList", "div"),
    ("TabsTrigger", "button"),
    ("Accordion", "div"),
    ("AccordionContent", "div"),
    ("AccordionItem", "div"),
    ("AccordionTrigger", "button"),
    ("Sheet", "div"),
    ("SheetContent", "div"),
    ("SheetDescription", "p"),
    ("SheetHeader", "div"),
    ("SheetTitle", "h2"),
    ("SheetTrigger", "button"),
    ("Popover", "div"),
    ("PopoverContent", "div"),
    ("PopoverTrigger", "button"),
    ("AlertDialog", "div"),
    ("AlertDialogAction", "button"),
    ("AlertDialogCancel", "button"),
    ("AlertDialogContent", "div"),
    ("AlertDialogDescription", "p"),
    ("AlertDialogFooter", "div"),
    ("AlertDialogHeader", "div"),
    ("AlertDialogTitle", "h2"),
    ("AlertDialogTrigger", "button"),
    ("Drawer", "div"),
    ("DrawerClose", "button"),
    ("DrawerContent", "div"),
    ("DrawerDescription", "p"),
    ("DrawerFooter", "div"),
    ("DrawerHeader", "div"),
    ("DrawerTitle", "h2"),
    ("DrawerTrigger", "button"),
    ("Collapsible", "div"),
    ("CollapsibleContent", "div"),
    ("CollapsibleTrigger", "button"),
    ("Carousel", "div"),
    ("CarouselContent", "div"),
    ("CarouselItem", "div"),
    ("CarouselNext", "button"),
    ("CarouselPrevious", "button"),
    ("Table", "table"),
    ("TableBody", "tbody"),
    ("TableCaption", "caption"),
    ("TableCell", "td"),
    ("TableHead", "th"),
    ("TableHeader", "thead"),
    ("TableRow", "tr"),
    ("ScrollArea", "div"),
    ("Pagination", "nav"),
    ("PaginationContent", "ul"),
    ("PaginationEllipsis", "span"),
    ("PaginationItem", "li"),
    ("PaginationLink", "a"),
    ("PaginationNext", "a"),
    ("PaginationPrevious", "a"),
    ("Command", "div"),
    ("CommandEmpty", "div"),
    ("CommandGroup", "div"),
    ("CommandInput", "input"),
    ("CommandItem", "div"),
    ("CommandList", "div"),
    ("CommandSeparator", "div"),
    ("CommandShortcut", "span"),
    ("Menubar", "div"),
    ("MenubarContent", "div"),
    ("MenubarItem", "div"),
    ("MenubarMenu", "div"),
    ("MenubarSeparator", "div"),
    ("MenubarShortcut", "span"),
    ("MenubarTrigger", "button"),
    ("NavigationMenu", "nav"),
    ("NavigationMenuContent", "div"),
    ("NavigationMenuItem", "li"),
    ("NavigationMenuLink", "a"),
    ("NavigationMenuList", "ul"),
    ("NavigationMenuTrigger", "button"),
    ("ButtonGroup", "div"),
    ("ButtonGroupSeparator", "div"),
    ("Empty", "div"),
    ("EmptyContent", "div"),
    ("EmptyDescription", "p"),
    ("EmptyHeader", "div"),
    ("EmptyMedia", "div"),
    ("EmptyTitle", "div"),
    ("Field", "div"),
    ("FieldContent", "div"),
    ("FieldDescription", "p"),
    ("FieldError", "div"),
    ("FieldLabel", "label"),
    ("HoverCard", "div"),
    ("HoverCardContent", "div"),
    ("HoverCardTrigger", "a"),
    ("InputOTP", "div"),
    ("InputOTPGroup", "div"),
    ("InputOTPSeparator", "div"),
    ("InputOTPSlot", "div"),
    ("ToggleGroup", "div"),
    ("ToggleGroupItem", "button"),
    ("Toggle", "button"),
];

/// Renders its `child` (or else `children.explicitList`) inside one tag, forwarding every other
/// scalar prop as an attribute.
///
/// Keys that are not valid attribute names, and `on*` handlers, are dropped.
pub(crate) struct PassThrough {
    tag: &'static str,
}

impl Renderer for PassThrough {
    fn render(&self, cx: &RenderCx<'_>) -> Element {
        let mut w = Widget::new(self.tag).attr("data-slot", kebab_case(cx.type_name()));
        if let Some(props) = cx.props().as_object() {
            for (name, raw) in props {
                if name == "child" || name == "children" {
                    continue;
                }
                if !is_attr_name(name) {
                    tracing::debug!(type_name = cx.type_name(), prop = %name, "prop not forwarded");
                    continue;
                }
                match cx.resolve(Some(raw)) {
                    Some(Value::String(s)) if name == "className" => w = w.class(s),
                    Some(v @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
                        w = w.attr(name.as_str(), v.clone());
                    }
                    _ => {}
                }
            }
        }
        match cx.prop_str("child").filter(|id| !id.is_empty()) {
            Some(id) => w.child(cx.render(id)).into(),
            None => w.children(cx.render_children()).into(),
        }
    }
}

/// Run the generic pass. Returns how many primitives were registered under their own name.
pub(super) fn register(reg: &mut Registry) -> usize {
    let mut registered = 0;
    for &(name, tag) in PRIMITIVES {
        let renderer: SharedRenderer = Arc::new(PassThrough { tag });
        if reg.register_generic(name, renderer) {
            registered += 1;
        }
    }
    registered
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/generic.rs"]
mod tests;
