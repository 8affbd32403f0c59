/*!
# `RESTORE`

## Purpose
Moves the `DATA` pointer back to the first item.

## Remarks
The items are gathered again from the current program.

## Example
```text
10 FOR I=1 TO 3
20 READ A$: PRINT A$;:RESTORE
30 NEXT
100 DATA "HELLO"
RUN
HELLOHELLOHELLO
```

*/
